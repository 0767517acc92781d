// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod contour;
pub mod sphere;
pub mod triangulation;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen
pub use self::contour::{ContourCache, SuperellipseSpec};
pub use self::sphere::{DecalProjector, GeographicCoordinates, TangentFrame};
pub use self::triangulation::{ContourTriangulator, Triangle};

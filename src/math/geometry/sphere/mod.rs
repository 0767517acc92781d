// src/math/geometry/sphere/mod.rs

// Deklaration der Untermodule für Kugel-spezifische Funktionalität
pub mod coordinates;
pub mod projection;
pub mod tangent;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Kugel-Elemente
pub use self::coordinates::GeographicCoordinates;
pub use self::projection::DecalProjector;
pub use self::tangent::TangentFrame;

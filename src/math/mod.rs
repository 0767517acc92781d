// src/math/mod.rs

pub mod error;
pub mod geometry;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            contour::{ContourCache, SuperellipseSpec},
            sphere::{coordinates::*, projection::*, tangent::*},
            triangulation::{ContourTriangulator, Triangle},
        },
        utils::*,
    };
}

// src/math/geometry/sphere/tangent.rs

use super::coordinates::GeographicCoordinates;
use crate::math::utils::constants;
use bevy::math::Vec3;

/// Lokale Orthonormalbasis an einem Kugeloberflächenpunkt.
/// `normal` zeigt radial nach außen, `east` entlang wachsender Länge,
/// `north` entlang wachsender Breite. Rechtshändig: east × north = normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentFrame {
    pub normal: Vec3,
    pub east: Vec3,
    pub north: Vec3,
}

impl TangentFrame {
    /// Baut die Basis am gegebenen Lon/Lat-Zentrum (Grad).
    /// An den Polen ist up × normal degeneriert; dort springt eine
    /// Ersatzachse (+Z) ein, damit die Basis überall definiert bleibt.
    pub fn at_degrees(center_lon_deg: f32, center_lat_deg: f32) -> Self {
        let normal = GeographicCoordinates::from_degrees(center_lat_deg, center_lon_deg)
            .unit_vector();

        let mut east = Vec3::Y.cross(normal);
        if east.length_squared() < 1e-8 {
            east = Vec3::Z.cross(normal);
        }
        let east = east.normalize();
        let north = normal.cross(east);

        Self {
            normal,
            east,
            north,
        }
    }

    /// Trägt einen Tangentialebenen-Punkt (u entlang east, v entlang north)
    /// als Richtungsvektor in Weltkoordinaten ab (nicht normalisiert).
    pub fn span(&self, u: f32, v: f32) -> Vec3 {
        self.east * u + self.north * v
    }

    /// Prüft Orthonormalität (für Diagnose; die Konstruktion garantiert sie)
    pub fn is_orthonormal(&self) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() < constants::EPSILON * 10.0;
        unit(self.normal)
            && unit(self.east)
            && unit(self.north)
            && self.normal.dot(self.east).abs() < constants::EPSILON * 10.0
            && self.normal.dot(self.north).abs() < constants::EPSILON * 10.0
            && self.east.dot(self.north).abs() < constants::EPSILON * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_right_handed(frame: &TangentFrame) {
        let cross = frame.east.cross(frame.north);
        assert_relative_eq!(cross.x, frame.normal.x, epsilon = 1e-5);
        assert_relative_eq!(cross.y, frame.normal.y, epsilon = 1e-5);
        assert_relative_eq!(cross.z, frame.normal.z, epsilon = 1e-5);
    }

    #[test]
    fn test_frame_is_orthonormal_everywhere() {
        for (lon, lat) in [
            (0.0, 0.0),
            (90.0, 45.0),
            (-120.0, -30.0),
            (180.0, 89.9),
            (0.0, 90.0),  // Nordpol
            (0.0, -90.0), // Südpol
            (37.0, -90.0),
        ] {
            let frame = TangentFrame::at_degrees(lon, lat);
            assert!(frame.is_orthonormal(), "degenerate at lon={lon} lat={lat}");
            assert_right_handed(&frame);
        }
    }

    #[test]
    fn test_equator_frame_axes() {
        // Am vorderen Äquatorpunkt: normal = +Z, east = +X, north = +Y
        let frame = TangentFrame::at_degrees(0.0, 0.0);
        assert_relative_eq!(frame.normal.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(frame.east.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(frame.north.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_span_combines_axes() {
        let frame = TangentFrame::at_degrees(0.0, 0.0);
        let v = frame.span(2.0, 3.0);
        assert_relative_eq!(v.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 3.0, epsilon = 1e-6);
    }
}

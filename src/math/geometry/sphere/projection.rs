// src/math/geometry/sphere/projection.rs

use super::{coordinates::GeographicCoordinates, tangent::TangentFrame};
use crate::math::{error::*, utils::*};
use bevy::math::{Vec2, Vec3};

/// Sicherheitsabstand unterhalb von π/2: hält die Projektion in der
/// gültigen Hemisphäre um den Aufpunkt.
const MAX_GEODESIC_ANGLE: f32 = constants::PI_OVER_2 - 1e-4;

/// Projiziert Tangentialebenen-Punkte auf die Kugeloberfläche.
///
/// Exponentialabbildung: ein Punkt im Abstand L vom Ursprung der
/// Tangentialebene landet auf dem Punkt, den man nach Bogenlänge L entlang
/// der zugehörigen Geodäte erreicht. Bogentreue nahe dem Aufpunkt; nahe der
/// Hemisphären-Grenze wird der Winkel geklemmt und die Form staucht sanft.
/// Für Geometrie, bei der Verzerrung akzeptabel ist (Gitternetz-Klasse),
/// gibt es daneben die billigere Lon/Lat-Skalierung.
pub struct DecalProjector {
    frame: TangentFrame,
    radius: f32,
    surface_offset: f32,
}

impl DecalProjector {
    /// Erstellt einen Projektor für die Kugel mit Radius `radius`.
    pub fn new(frame: TangentFrame, radius: f32) -> MathResult<Self> {
        if radius <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: "Sphere radius must be positive for projection.".to_string(),
            });
        }
        Ok(Self {
            frame,
            radius,
            surface_offset: 0.0,
        })
    }

    /// Setzt einen kleinen Offset nach außen (gegen Z-Fighting mit der
    /// Basiskugel).
    pub fn with_surface_offset(mut self, offset: f32) -> Self {
        self.surface_offset = offset;
        self
    }

    pub fn frame(&self) -> &TangentFrame {
        &self.frame
    }

    /// Exponentialabbildung eines Tangentialebenen-Punktes (u, v) in
    /// Weltlängen-Einheiten. Das Ergebnis liegt im Abstand
    /// radius + offset vom Kugelzentrum.
    pub fn project(&self, point: Vec2) -> Vec3 {
        let arc_length = point.length();

        // Degenerierte Richtung: der Ursprung projiziert auf den Aufpunkt
        // selbst, die Richtung ist dort beliebig.
        let direction = if arc_length > constants::EPSILON {
            self.frame.span(point.x, point.y).normalize()
        } else {
            self.frame.north
        };

        let theta = (arc_length / self.radius).min(MAX_GEODESIC_ANGLE);
        let unit = self.frame.normal * theta.cos() + direction * theta.sin();
        unit * (self.radius + self.surface_offset)
    }

    /// Projiziert eine ganze Kontur
    pub fn project_contour(&self, points: &[Vec2]) -> Vec<Vec3> {
        points.iter().map(|&p| self.project(p)).collect()
    }

    /// Lon/Lat-Skalierung: normalisierte Konturkoordinaten (x, y in [-1, 1])
    /// werden linear auf Längen-/Breitengrad um ein Zentrum abgebildet.
    /// Billiger als die Exponentialabbildung, verzerrt aber zu den Polen hin.
    pub fn project_lon_lat(
        &self,
        normalized: Vec2,
        center: GeographicCoordinates,
        lon_scale_rad: f32,
        lat_scale_rad: f32,
    ) -> Vec3 {
        let geo = GeographicCoordinates::new(
            center.latitude + normalized.y * lat_scale_rad,
            center.longitude + normalized.x * lon_scale_rad,
        );
        geo.to_cartesian(self.radius + self.surface_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn projector(lon: f32, lat: f32, radius: f32) -> DecalProjector {
        DecalProjector::new(TangentFrame::at_degrees(lon, lat), radius).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let frame = TangentFrame::at_degrees(0.0, 0.0);
        assert!(DecalProjector::new(frame, 0.0).is_err());
        assert!(DecalProjector::new(frame, -1.0).is_err());
    }

    #[test]
    fn test_points_land_on_sphere_surface() {
        let proj = projector(20.0, -35.0, 2.0);
        for p in [
            Vec2::new(0.3, 0.1),
            Vec2::new(-1.0, 0.8),
            Vec2::new(0.0, -2.5),
            Vec2::new(100.0, 100.0), // weit jenseits der Klemmgrenze
        ] {
            assert_relative_eq!(proj.project(p).length(), 2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_origin_projects_to_frame_normal() {
        let frame = TangentFrame::at_degrees(40.0, 10.0);
        let proj = DecalProjector::new(frame, 1.0)
            .unwrap()
            .with_surface_offset(0.5);

        let projected = proj.project(Vec2::ZERO);
        let expected = frame.normal * 1.5;
        assert_relative_eq!(projected.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(projected.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(projected.z, expected.z, epsilon = 1e-6);
    }

    #[test]
    fn test_arc_length_is_preserved() {
        // Bogentreue: ein Punkt im Abstand d vom Ursprung hat auf der Kugel
        // den Winkelabstand d / radius vom Aufpunkt.
        let radius = 2.0;
        let proj = projector(0.0, 0.0, radius);
        let frame = TangentFrame::at_degrees(0.0, 0.0);

        let d = 1.2;
        let projected = proj.project(Vec2::new(d, 0.0)).normalize();
        let angle = projected.dot(frame.normal).acos();
        assert_relative_eq!(angle, d / radius, epsilon = 1e-4);
    }

    #[test]
    fn test_surface_offset_adds_to_radius() {
        let proj = projector(0.0, 0.0, 1.0).with_surface_offset(0.25);
        assert_relative_eq!(proj.project(Vec2::new(0.5, 0.5)).length(), 1.25, epsilon = 1e-5);
    }

    #[test]
    fn test_lon_lat_scaling_center() {
        let proj = projector(0.0, 0.0, 1.0);
        let center = GeographicCoordinates::from_degrees(0.0, 0.0);
        let p = proj.project_lon_lat(Vec2::ZERO, center, 1.0, 0.5);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-6);
    }
}

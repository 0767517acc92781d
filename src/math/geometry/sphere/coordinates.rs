// src/math/geometry/sphere/coordinates.rs

use crate::math::utils::*;
use bevy::math::Vec3;

/// Geografische Koordinaten (Lat/Lon), Y ist Hochachse.
/// Längengrad 0 / Breitengrad 0 liegt auf der +Z-Achse (Blickrichtung der
/// Standard-Kamera), Längengrad wächst Richtung +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicCoordinates {
    /// Breitengrad in Radiant (-π/2 bis π/2)
    pub latitude: f32,
    /// Längengrad in Radiant (-π bis π)
    pub longitude: f32,
}

impl GeographicCoordinates {
    /// Erstellt neue geografische Koordinaten
    pub fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude: latitude.clamp(-constants::PI_OVER_2, constants::PI_OVER_2),
            longitude: angles::normalize_angle_signed(longitude),
        }
    }

    /// Erstellt aus Grad-Werten
    pub fn from_degrees(lat_deg: f32, lon_deg: f32) -> Self {
        Self::new(angles::deg_to_rad(lat_deg), angles::deg_to_rad(lon_deg))
    }

    /// Einheitsvektor vom Kugelzentrum zu diesem Oberflächenpunkt
    pub fn unit_vector(&self) -> Vec3 {
        let cos_lat = self.latitude.cos();
        Vec3::new(
            cos_lat * self.longitude.sin(),
            self.latitude.sin(),
            cos_lat * self.longitude.cos(),
        )
    }

    /// Konvertiert zu kartesischen Koordinaten auf Radius `radius`
    pub fn to_cartesian(&self, radius: f32) -> Vec3 {
        self.unit_vector() * radius
    }
}

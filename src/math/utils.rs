// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const EPSILON_SQUARED: f32 = EPSILON * EPSILON; // Für Vergleiche mit Längenquadraten
    pub const TAU: f32 = std::f32::consts::TAU;
    pub const PI: f32 = std::f32::consts::PI;
    pub const PI_OVER_2: f32 = std::f32::consts::PI / 2.0;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::{PI, TAU};

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * 180.0 / PI
    }

    /// Normalisiert einen Winkel auf [-π, π)
    pub fn normalize_angle_signed(angle: f32) -> f32 {
        let mut result = angle % TAU;
        if result > PI {
            result -= TAU;
        } else if result < -PI {
            result += TAU;
        }
        result
    }

    /// Wickelt `target` gegen `current` ab: liefert die Darstellung von
    /// `target`, die über den kürzesten Winkelweg erreichbar ist.
    /// atan2(sin, cos) statt Modulo, damit genau an der ±π-Grenze kein
    /// Sprung entsteht.
    pub fn unwrap_towards(target: f32, current: f32) -> f32 {
        let delta = (target - current).sin().atan2((target - current).cos());
        current + delta
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use bevy::math::Vec2;

    /// Rotiert einen 2D-Vektor um einen Winkel
    pub fn rotate_vector_2d(v: Vec2, angle_rad: f32) -> Vec2 {
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();
        Vec2::new(v.x * cos_a - v.y * sin_a, v.x * sin_a + v.y * cos_a)
    }
}

/// Easing-Funktionen für Animationen
pub mod easing {
    /// Cubic ease-out
    pub fn ease_out_cubic(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unwrap_shortest_path_across_boundary() {
        // 170° -> -170°: der kurze Weg ist 20°, nicht 340°.
        let current = angles::deg_to_rad(170.0);
        let target = angles::deg_to_rad(-170.0);

        let unwrapped = angles::unwrap_towards(target, current);
        assert!((unwrapped - current).abs() <= angles::deg_to_rad(20.0) + constants::EPSILON);
        // und die abgewickelte Darstellung ist äquivalent zum Ziel
        assert!(comparison::nearly_equal_eps(
            angles::normalize_angle_signed(unwrapped),
            target,
            1e-4,
        ));
    }

    #[test]
    fn test_unwrap_identity_for_nearby_angles() {
        let unwrapped = angles::unwrap_towards(0.3, 0.1);
        assert_relative_eq!(unwrapped, 0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_angle_signed() {
        assert_relative_eq!(
            angles::normalize_angle_signed(constants::TAU + 0.25),
            0.25,
            epsilon = 1e-5
        );
        assert!(angles::normalize_angle_signed(-constants::PI - 0.1) > 0.0);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_relative_eq!(easing::ease_out_cubic(0.0), 0.0);
        assert_relative_eq!(easing::ease_out_cubic(1.0), 1.0);
        assert_relative_eq!(easing::ease_out_cubic(2.0), 1.0); // geklemmt
        assert!(easing::ease_out_cubic(0.5) > 0.5); // ease-out startet schnell
    }

    #[test]
    fn test_rotate_vector_2d_quarter_turn() {
        let v = bevy::math::Vec2::X;
        let rotated = simple_geometry::rotate_vector_2d(v, constants::PI_OVER_2);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
    }
}

// src/globe/gaze.rs

use crate::globe::config::GlobeConfig;
use bevy::math::Vec2;
use bevy::prelude::*;

/// Geglätteter Versatz der Pupille in der Iris-Ebene
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct GazeState {
    pub offset: Vec2,
}

impl GazeState {
    /// Maximaler Versatz, bei dem die Pupille vollständig in der Iris bleibt
    pub fn max_offset(config: &GlobeConfig) -> f32 {
        (config.iris_radius - config.pupil_radius - 1e-3).max(0.0) * config.pupil_offset_scale
    }

    /// Ein Glättungsschritt gegen den aktuellen Zeiger. Die Richtung wird
    /// auf Einheitslänge geklemmt, die Zielposition bleibt damit innerhalb
    /// des zulässigen Kreises. Faktor pro Aufruf, wie bei der Rotation.
    pub fn stepped(&self, pointer: Vec2, config: &GlobeConfig) -> Self {
        let direction = if pointer.length_squared() > 1.0 {
            pointer.normalize()
        } else {
            pointer
        };
        let target = direction * Self::max_offset(config);
        Self {
            offset: self.offset.lerp(target, config.pupil_lerp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_offset_stays_within_iris() {
        let config = GlobeConfig::default();
        let bound = GazeState::max_offset(&config);

        let mut state = GazeState::default();
        for _ in 0..300 {
            state = state.stepped(Vec2::new(40.0, -25.0), &config);
            assert!(state.offset.length() <= bound + 1e-5);
        }
        // und die Schranke wird im Grenzwert erreicht
        assert_relative_eq!(state.offset.length(), bound, epsilon = 1e-4);
    }

    #[test]
    fn test_centered_pointer_recenters_pupil() {
        let config = GlobeConfig::default();
        let mut state = GazeState {
            offset: Vec2::new(0.05, -0.03),
        };
        for _ in 0..200 {
            state = state.stepped(Vec2::ZERO, &config);
        }
        assert!(state.offset.length() < 1e-5);
    }

    #[test]
    fn test_inner_pointer_scales_linearly() {
        let config = GlobeConfig::default();
        let bound = GazeState::max_offset(&config);

        let mut state = GazeState::default();
        for _ in 0..300 {
            state = state.stepped(Vec2::new(0.5, 0.0), &config);
        }
        assert_relative_eq!(state.offset.x, bound * 0.5, epsilon = 1e-4);
        assert_relative_eq!(state.offset.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_iris_pins_pupil() {
        // Pupille größer als Iris: Schranke kollabiert auf 0
        let config = GlobeConfig {
            iris_radius: 0.1,
            pupil_radius: 0.2,
            ..GlobeConfig::default()
        };
        assert_eq!(GazeState::max_offset(&config), 0.0);

        let state = GazeState {
            offset: Vec2::splat(0.1),
        };
        let next = state.stepped(Vec2::ONE, &config);
        assert!(next.offset.length() < state.offset.length());
    }
}

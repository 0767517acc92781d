// src/globe/animation.rs

use crate::globe::config::GlobeConfig;
use crate::math::utils::{comparison, easing};
use bevy::prelude::*;

/// Fortschritt der Erscheinen-Animation in [0, 1]; monoton, friert bei 1 ein
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AppearanceState {
    pub progress: f32,
}

impl Default for AppearanceState {
    fn default() -> Self {
        Self { progress: 0.0 }
    }
}

impl AppearanceState {
    pub fn stepped(&self, delta_seconds: f32, rate: f32) -> Self {
        Self {
            progress: (self.progress + delta_seconds * rate).min(1.0),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Aktueller Skalierungsfaktor: kubisch auslaufend vom Startwert zu 1
    pub fn scale(&self, scale_start: f32) -> f32 {
        comparison::lerp(scale_start, 1.0, easing::ease_out_cubic(self.progress))
    }
}

/// Fortlaufende Animationszeit in Sekunden, Basis für Schweben und Puls
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    pub elapsed: f32,
}

impl AnimationClock {
    pub fn tick(&mut self, delta_seconds: f32) {
        self.elapsed += delta_seconds;
    }

    /// Vertikales Schweben der Wurzel
    pub fn float_offset(&self) -> Vec3 {
        Vec3::new(0.0, 0.08 * self.elapsed.sin(), 0.0)
    }

    /// Langsames Rollpendeln der Wurzel, Radiant
    pub fn float_sway(&self) -> f32 {
        0.03 * (0.5 * self.elapsed).sin()
    }

    /// Oszillierender Deckkraftfaktor des Glow-Materials; läuft über 1
    /// hinaus und sättigt dort, wie in der Vorlage
    pub fn glow_pulse(&self, config: &GlobeConfig) -> f32 {
        (1.0 + config.glow_pulse_amplitude * (config.glow_pulse_speed * self.elapsed).sin())
            .clamp(0.0, 1.0)
    }

    /// Effektive Alpha der Band-Innenkante unter dem Puls
    pub fn glow_alpha(&self, config: &GlobeConfig) -> f32 {
        config.glow_inner_alpha * self.glow_pulse(config)
    }
}

// src/globe/orientation.rs

use crate::globe::config::GlobeConfig;
use crate::math::utils::{angles, comparison};
use bevy::math::{EulerRot, Quat, Vec2};
use bevy::prelude::*;

/// Geglättete Blickrichtung des Globus in Radiant.
/// Die Werte sind unbegrenzt fortlaufend gedacht; `stepped` entrollt das
/// Ziel vor dem Glätten, damit der Übergang über ±π nie rückwärts läuft.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationState {
    pub yaw: f32,
    pub pitch: f32,
}

/// Aus der Konfiguration abgeleitete Stellgrößen der Orientierung
#[derive(Debug, Clone, Copy)]
pub struct OrientationTuning {
    pub max_yaw: f32,
    pub max_pitch: f32,
    pub smooth_factor: f32,
    pub pointer_clamp: f32,
    pub base_roll: f32,
}

impl OrientationTuning {
    pub fn from_config(config: &GlobeConfig) -> Self {
        Self {
            max_yaw: angles::deg_to_rad(config.max_yaw_deg),
            max_pitch: angles::deg_to_rad(config.max_pitch_deg),
            smooth_factor: config.rotation_lerp,
            pointer_clamp: config.pointer_clamp,
            base_roll: angles::deg_to_rad(config.base_roll_deg),
        }
    }
}

impl OrientationState {
    /// Ein Glättungsschritt gegen den aktuellen Zeiger.
    ///
    /// Zeigerkoordinaten werden symmetrisch geklemmt und dann linear auf
    /// die Winkelgrenzen abgebildet: das Einheitsquadrat deckt den vollen
    /// Bereich ab, Werte dahinter sättigen. Der Faktor gilt pro Aufruf,
    /// nicht pro Sekunde — die Glättung ist bewusst an die Framerate
    /// gekoppelt und deckt sich so mit dem Verhalten der Quellanwendung.
    pub fn stepped(&self, pointer: Vec2, tuning: &OrientationTuning) -> Self {
        let clamp = tuning.pointer_clamp;
        let nx = pointer.x.clamp(-clamp, clamp).clamp(-1.0, 1.0);
        let ny = pointer.y.clamp(-clamp, clamp).clamp(-1.0, 1.0);

        let target_yaw = nx * tuning.max_yaw;
        let target_pitch = ny * tuning.max_pitch;

        // Ziel auf den zum aktuellen Wert nächsten Repräsentanten heben
        let yaw_goal = angles::unwrap_towards(target_yaw, self.yaw);
        let pitch_goal = angles::unwrap_towards(target_pitch, self.pitch);

        let yaw = comparison::lerp(self.yaw, yaw_goal, tuning.smooth_factor);
        let pitch = comparison::lerp(self.pitch, pitch_goal, tuning.smooth_factor);

        // Nachklemmung hält die Schranke auch bei Grenzen jenseits von 90°,
        // wo der entrollte Repräsentant kurzzeitig überschießen kann
        Self {
            yaw: yaw.clamp(-tuning.max_yaw, tuning.max_yaw),
            pitch: pitch.clamp(-tuning.max_pitch, tuning.max_pitch),
        }
    }

    /// Gesamtrotation inklusive konstanter Grundneigung.
    /// Reihenfolge Yaw → Pitch → Roll; positives Pitch senkt den Blick,
    /// daher das Vorzeichen auf der X-Achse.
    pub fn rotation(&self, base_roll: f32) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, base_roll)
    }
}

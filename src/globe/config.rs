// src/globe/config.rs

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Konfigurationsfläche des Globus: reine Zahlen-/Farbwerte.
/// Farben liegen als lineares RGB-Tripel, Deckkraft separat — so bleibt die
/// Struktur serialisierbar und von Hosts als Preset ablegbar.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobeConfig {
    // --- Kugel & Gitternetz ---
    /// Kugelradius in Weltlängen; konstant pro Sitzung
    pub radius: f32,
    /// Anzahl Breitenkreise (ohne Pole)
    pub lat_lines: usize,
    /// Anzahl Meridiane
    pub lon_lines: usize,
    /// Abtastpunkte pro Gitterkreis
    pub grid_samples: usize,
    /// Anhebung der Gitterlinien über die Kugeloberfläche
    pub grid_lift: f32,
    pub line_color: [f32; 3],
    pub line_opacity: f32,
    pub line_width: f32,

    // --- Decal (Superellipse auf der Kugel) ---
    pub decal_a: f32,
    pub decal_b: f32,
    /// Exponent der Superellipse, > 0
    pub decal_n: f32,
    pub decal_fill_segments: usize,
    pub decal_outline_segments: usize,
    /// Breite der Tangentialebenen-Fläche als Vielfaches des Radius
    pub decal_plane_width_factor: f32,
    pub decal_plane_height_factor: f32,
    pub decal_center_lon_deg: f32,
    pub decal_center_lat_deg: f32,
    pub decal_angle_deg: f32,
    pub decal_surface_offset: f32,
    pub fill_color: [f32; 3],
    pub fill_opacity: f32,

    // --- Glow-Band ---
    /// Skaliert die äußere Konturkopie (1 + glow_scale)
    pub glow_scale: f32,
    pub glow_inner_alpha: f32,
    pub glow_pulse_speed: f32,
    pub glow_pulse_amplitude: f32,

    // --- Auge ---
    pub eye_color: [f32; 3],
    pub pupil_color: [f32; 3],
    pub iris_radius: f32,
    pub pupil_radius: f32,
    /// Glättungsfaktor der Pupille pro Aufruf (schneller als die Rotation)
    pub pupil_lerp: f32,
    pub pupil_offset_scale: f32,

    // --- Orientierung ---
    /// Glättungsfaktor der Rotation pro Aufruf
    pub rotation_lerp: f32,
    pub max_yaw_deg: f32,
    pub max_pitch_deg: f32,
    pub base_roll_deg: f32,
    /// Symmetrische Klemme für Zeigerkoordinaten jenseits der Fläche
    pub pointer_clamp: f32,

    // --- Erscheinen & Umgebung ---
    pub appear_rate: f32,
    pub appear_scale_start: f32,
    pub floor_opacity: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            // Kugel & Gitternetz
            radius: 1.0,
            lat_lines: 9,
            lon_lines: 12,
            grid_samples: 256,
            grid_lift: 0.001,
            line_color: [0.431, 0.545, 1.0],
            line_opacity: 0.7,
            line_width: 1.5,

            // Decal
            decal_a: 2.0,
            decal_b: 0.6,
            decal_n: 1.5,
            decal_fill_segments: 384,
            decal_outline_segments: 512,
            decal_plane_width_factor: 1.2,
            decal_plane_height_factor: 0.5,
            decal_center_lon_deg: 0.0,
            decal_center_lat_deg: 0.0,
            decal_angle_deg: 0.0,
            decal_surface_offset: 0.5,
            fill_color: [0.09, 0.09, 0.09],
            fill_opacity: 1.0,

            // Glow
            glow_scale: 0.3,
            glow_inner_alpha: 0.4,
            glow_pulse_speed: 1.6,
            glow_pulse_amplitude: 0.18,

            // Auge
            eye_color: [0.604, 0.725, 1.0],
            pupil_color: [0.043, 0.043, 0.043],
            iris_radius: 0.24,
            pupil_radius: 0.12,
            pupil_lerp: 0.3,
            pupil_offset_scale: 0.75,

            // Orientierung
            rotation_lerp: 0.15,
            max_yaw_deg: 45.0,
            max_pitch_deg: 30.0,
            base_roll_deg: 8.0,
            pointer_clamp: 1.2,

            // Erscheinen & Umgebung
            appear_rate: 1.5,
            appear_scale_start: 0.9,
            floor_opacity: 0.12,
        }
    }
}

impl GlobeConfig {
    /// Halbe Ausdehnung der Decal-Fläche in Weltlängen
    pub fn decal_half_extents(&self) -> (f32, f32) {
        (
            self.radius * self.decal_plane_width_factor * 0.5,
            self.radius * self.decal_plane_height_factor * 0.5,
        )
    }
}

/// RGB-Tripel plus Deckkraft zu einer Bevy-Farbe
pub fn rgba(rgb: [f32; 3], alpha: f32) -> Color {
    Color::rgba(rgb[0], rgb[1], rgb[2], alpha)
}

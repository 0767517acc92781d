// src/debug/ui.rs
use crate::globe::animation::AppearanceState;
use crate::globe::config::GlobeConfig;
use crate::globe::gaze::GazeState;
use crate::globe::orientation::OrientationState;
use crate::math::utils::angles;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Slider, Window},
};

/// Steuerfenster: alle Konfigurationswerte live editierbar, dazu eine
/// Anzeige des aktuellen Orientierungs- und Blickzustands
pub fn globe_control_ui_system(
    mut contexts: EguiContexts,
    mut config: ResMut<GlobeConfig>,
    orientation: Res<OrientationState>,
    gaze: Res<GazeState>,
    appearance: Res<AppearanceState>,
) {
    Window::new("Globussteuerung")
        .default_width(330.0)
        .show(contexts.ctx_mut(), |ui| {
            // Geänderte Werte landen erst am Ende wieder in der Ressource,
            // damit die Change-Detection nicht bei jedem Frame anschlägt
            let mut edited = config.clone();

            ui.collapsing("Gitternetz", |ui| {
                ui.add(Slider::new(&mut edited.lat_lines, 1..=32).text("Breitenkreise"));
                ui.add(Slider::new(&mut edited.lon_lines, 2..=48).text("Meridiane"));
                ui.add(Slider::new(&mut edited.grid_samples, 16..=512).text("Abtastpunkte"));
                ui.add(Slider::new(&mut edited.line_width, 0.5..=6.0).text("Linienbreite"));
                ui.add(Slider::new(&mut edited.line_opacity, 0.0..=1.0).text("Deckkraft"));
                color_edit(ui, "Linienfarbe", &mut edited.line_color);
            });

            ui.collapsing("Decal", |ui| {
                ui.add(Slider::new(&mut edited.decal_a, 0.2..=4.0).text("Halbachse a"));
                ui.add(Slider::new(&mut edited.decal_b, 0.1..=2.0).text("Halbachse b"));
                ui.add(Slider::new(&mut edited.decal_n, 0.5..=8.0).text("Exponent n"));
                ui.add(
                    Slider::new(&mut edited.decal_center_lon_deg, -180.0..=180.0)
                        .text("Zentrum Länge"),
                );
                ui.add(
                    Slider::new(&mut edited.decal_center_lat_deg, -85.0..=85.0)
                        .text("Zentrum Breite"),
                );
                ui.add(Slider::new(&mut edited.decal_angle_deg, -180.0..=180.0).text("Drehung"));
                ui.add(
                    Slider::new(&mut edited.decal_surface_offset, 0.0..=1.0)
                        .text("Oberflächenabstand"),
                );
                color_edit(ui, "Füllfarbe", &mut edited.fill_color);
            });

            ui.collapsing("Glow", |ui| {
                ui.add(Slider::new(&mut edited.glow_scale, 0.0..=1.0).text("Bandbreite"));
                ui.add(Slider::new(&mut edited.glow_inner_alpha, 0.0..=1.0).text("Basis-Alpha"));
                ui.add(Slider::new(&mut edited.glow_pulse_speed, 0.0..=6.0).text("Pulsfrequenz"));
                ui.add(
                    Slider::new(&mut edited.glow_pulse_amplitude, 0.0..=1.0).text("Pulshub"),
                );
            });

            ui.collapsing("Auge", |ui| {
                ui.add(Slider::new(&mut edited.iris_radius, 0.05..=0.6).text("Iris-Radius"));
                ui.add(Slider::new(&mut edited.pupil_radius, 0.02..=0.4).text("Pupillen-Radius"));
                ui.add(Slider::new(&mut edited.pupil_lerp, 0.01..=1.0).text("Glättung"));
                ui.add(
                    Slider::new(&mut edited.pupil_offset_scale, 0.0..=1.0).text("Versatz-Skala"),
                );
                color_edit(ui, "Irisfarbe", &mut edited.eye_color);
            });

            ui.collapsing("Orientierung", |ui| {
                ui.add(Slider::new(&mut edited.max_yaw_deg, 0.0..=90.0).text("Max. Gieren"));
                ui.add(Slider::new(&mut edited.max_pitch_deg, 0.0..=60.0).text("Max. Nicken"));
                ui.add(Slider::new(&mut edited.base_roll_deg, -45.0..=45.0).text("Grundrollen"));
                ui.add(Slider::new(&mut edited.rotation_lerp, 0.01..=1.0).text("Glättung"));
                ui.add(Slider::new(&mut edited.pointer_clamp, 1.0..=3.0).text("Zeiger-Klemme"));
            });

            ui.separator();
            ui.label(format!(
                "Gieren {:+.1}°   Nicken {:+.1}°",
                angles::rad_to_deg(orientation.yaw),
                angles::rad_to_deg(orientation.pitch)
            ));
            ui.label(format!(
                "Pupille ({:+.3}, {:+.3})   Erscheinen {:.0} %",
                gaze.offset.x,
                gaze.offset.y,
                appearance.progress * 100.0
            ));

            if ui.button("Zurücksetzen").clicked() {
                edited = GlobeConfig::default();
            }

            if edited != *config {
                *config = edited;
            }
        });
}

/// RGB-Editor über das egui-Farbfeld
fn color_edit(ui: &mut egui::Ui, label: &str, rgb: &mut [f32; 3]) {
    ui.horizontal(|ui| {
        ui.color_edit_button_rgb(rgb);
        ui.label(label);
    });
}

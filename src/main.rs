// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod debug;
pub mod globe;
pub mod math;
pub mod setup;

use debug::ui::globe_control_ui_system;
use globe::config::GlobeConfig;
use globe::systems::*;
use globe::{AnimationClock, AppearanceState, GazeState, OrientationState, PointerInput};
use setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .init_resource::<GlobeConfig>()
        .init_resource::<PointerInput>()
        .init_resource::<OrientationState>()
        .init_resource::<GazeState>()
        .init_resource::<AppearanceState>()
        .init_resource::<AnimationClock>()
        .init_resource::<GlobeGeometry>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // Block 1: UI und Eingabe
                globe_control_ui_system,
                globe::pointer::track_pointer,
                // Block 2: Geometrie und Stil dem Konfigurationsstand nachziehen
                sync_geometry,
                refresh_style,
                configure_wireframe_style,
                // Block 3: Zustand fortschreiben und auf die Szene anwenden
                advance_animation,
                drive_orientation,
                drive_gaze,
                float_root,
                pulse_glow,
                draw_wireframe,
            )
                .chain(),
        )
        .run();
}

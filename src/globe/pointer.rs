// src/globe/pointer.rs

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Zuletzt gesehene Zeigerposition in normalisierten Fensterkoordinaten:
/// (−1, −1) unten links, (1, 1) oben rechts, (0, 0) Fenstermitte.
/// Ohne Ereignisse bleibt der letzte Wert stehen; Start ist die Mitte.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    pub ndc: Vec2,
}

impl PointerInput {
    /// Fensterpixel zu normalisierten Koordinaten; Y wird gespiegelt,
    /// da Fensterkoordinaten nach unten wachsen.
    pub fn normalize(position: Vec2, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            (position.x / width) * 2.0 - 1.0,
            -((position.y / height) * 2.0 - 1.0),
        )
    }
}

/// Übernimmt die letzte Cursorbewegung des Frames in die Ressource
pub fn track_pointer(
    mut events: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerInput>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    // Bei mehreren Ereignissen pro Frame zählt das letzte
    if let Some(moved) = events.read().last() {
        pointer.ndc = PointerInput::normalize(moved.position, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_origin() {
        let ndc = PointerInput::normalize(Vec2::new(640.0, 360.0), 1280.0, 720.0);
        assert_relative_eq!(ndc.x, 0.0);
        assert_relative_eq!(ndc.y, 0.0);
    }

    #[test]
    fn test_corners_map_to_unit_square() {
        // Fenster-Y wächst nach unten: oben links → (−1, 1)
        let top_left = PointerInput::normalize(Vec2::ZERO, 800.0, 600.0);
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = PointerInput::normalize(Vec2::new(800.0, 600.0), 800.0, 600.0);
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }

    #[test]
    fn test_default_is_centered() {
        assert_eq!(PointerInput::default().ndc, Vec2::ZERO);
    }
}

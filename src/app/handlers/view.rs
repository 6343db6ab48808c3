//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MovementInput;
use glam::Vec2;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Simulationsschritt der Kamera am Ende des Frames.
pub fn tick(state: &mut AppState, movement: MovementInput) {
    use_cases::camera::tick(state, movement);
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Dolly-Zoom entlang der Blickrichtung.
pub fn zoom(state: &mut AppState, delta: f32) {
    use_cases::camera::zoom(state, delta);
}

/// Startet den Übergang zu einem Preset-Viewpoint.
pub fn snap_to_viewpoint(state: &mut AppState, index: usize) {
    use_cases::camera::snap_to_viewpoint(state, index);
}

/// Setzt die Fluggeschwindigkeit.
pub fn set_move_speed(state: &mut AppState, speed: f32) {
    use_cases::camera::set_move_speed(state, speed);
}

//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::{viewpoint, MovementInput};
use glam::Vec2;

/// Setzt die Kamera auf Default zurück (Tuning bleibt erhalten).
pub fn reset_camera(state: &mut AppState) {
    state.view.camera.reset();
    state.view.active_viewpoint = None;
}

/// Ein Simulationsschritt der Kamera.
pub fn tick(state: &mut AppState, movement: MovementInput) {
    state.view.camera.tick(movement);
}

/// Verschiebt die Kamera in der Bildebene.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta.x, delta.y);
}

/// Dolly entlang der Blickrichtung.
pub fn zoom(state: &mut AppState, delta: f32) {
    state.view.camera.zoom(delta);
}

/// Startet den Übergang zu einem Preset.
pub fn snap_to_viewpoint(state: &mut AppState, index: usize) {
    let Some(vp) = viewpoint(index) else {
        log::debug!("Viewpoint {} existiert nicht", index);
        return;
    };
    state.view.camera.snap_to(vp);
    state.view.active_viewpoint = Some(index);
    log::info!("Kamera-Snap zu '{}'", vp.name);
}

/// Setzt die maximale Fluggeschwindigkeit (auch in den Optionen).
pub fn set_move_speed(state: &mut AppState, speed: f32) {
    if state.view.camera.tuning.set_move_speed(speed) {
        state.options.camera.move_speed = speed;
    }
}

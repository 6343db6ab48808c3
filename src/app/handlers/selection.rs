//! Handler für Selektion, Hover und Maus-Gesten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointRef;
use glam::Vec2;

/// Selektiert einen Punkt (HUD-Liste).
pub fn select_point(state: &mut AppState, point: PointRef) {
    use_cases::selection::select_point(state, point);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Primäre Maustaste gedrückt.
pub fn begin_gesture(state: &mut AppState, pos: Vec2) {
    use_cases::selection::begin_gesture(state, pos);
}

/// Maus bei gedrückter Taste bewegt.
pub fn update_gesture(state: &mut AppState, pos: Vec2) {
    use_cases::selection::update_gesture(state, pos);
}

/// Primäre Maustaste losgelassen.
pub fn end_gesture(state: &mut AppState, pos: Vec2) {
    use_cases::selection::end_gesture(state, pos);
}

/// Aktualisiert Hover-Punkt und Hover-Achse.
pub fn update_hover(state: &mut AppState, pos: Option<Vec2>) {
    use_cases::selection::update_hover(state, pos);
}

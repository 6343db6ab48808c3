//! Handler für Änderungen an Vertices und Kontrollpunkten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointRef;
use glam::Vec3;

/// Fügt einen Vertex hinzu (Position oder vor der Kamera).
pub fn add_vertex(state: &mut AppState, position: Option<Vec3>) {
    use_cases::editing::add_vertex(state, position);
}

/// Löscht einen Vertex bzw. setzt einen Kontrollpunkt zurück.
pub fn delete_point(state: &mut AppState, point: PointRef) {
    use_cases::editing::delete_point(state, point);
}

/// Setzt die Position eines Punkts.
pub fn set_point_position(state: &mut AppState, point: PointRef, position: Vec3) {
    use_cases::editing::set_point_position(state, point, position);
}

/// Verschiebt einen Punkt um ein Delta.
pub fn nudge_point(state: &mut AppState, point: PointRef, delta: Vec3) {
    use_cases::editing::nudge_point(state, point, delta);
}

/// Ersetzt die Strecke durch die Start-Strecke.
pub fn reset_track(state: &mut AppState) {
    use_cases::editing::reset_track(state);
}

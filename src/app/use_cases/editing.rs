//! Use-Case-Funktionen für Änderungen an der Strecke.
//!
//! Jede wirksame Änderung legt vorher einen Undo-Snapshot an.

use crate::app::AppState;
use crate::core::{PointKind, PointRef, Track};
use glam::Vec3;
use std::sync::Arc;

/// Hängt einen Vertex an und selektiert ihn.
///
/// Ohne Position entsteht er `add_vertex_distance` Einheiten vor der Kamera.
pub fn add_vertex(state: &mut AppState, position: Option<Vec3>) {
    let position = position.unwrap_or_else(|| {
        let camera = &state.view.camera;
        camera.position + camera.forward() * state.options.add_vertex_distance
    });

    state.record_undo_snapshot();
    let index = state.track_mut().add_vertex(position);
    state.selection.selected = Some(PointRef::vertex(index));
    state.selection.hovered_axis = None;

    log::info!(
        "Vertex {} hinzugefügt bei ({:.1}, {:.1}, {:.1})",
        index,
        position.x,
        position.y,
        position.z
    );
}

/// Löscht einen Vertex bzw. setzt einen Kontrollpunkt auf den Mittelpunkt zurück.
///
/// Die Selektion wird in beiden Fällen aufgehoben.
pub fn delete_point(state: &mut AppState, point: PointRef) {
    if !state.track.contains(point) {
        log::debug!("Löschen ignoriert: {:?} existiert nicht", point);
        return;
    }

    state.record_undo_snapshot();
    match point.kind {
        PointKind::Vertex => {
            state.track_mut().delete_vertex(point.index);
            log::info!(
                "Vertex {} gelöscht ({} verbleibend)",
                point.index,
                state.track.vertex_count()
            );
        }
        PointKind::Control => {
            state.track_mut().reset_control(point.index);
            log::info!("Kontrollpunkt {} zurückgesetzt", point.index);
        }
    }

    // Indizes dahinter sind verschoben: laufende Geste und Hover verwerfen
    state.selection.selected = None;
    state.selection.hovered = None;
    state.selection.hovered_axis = None;
    state.interaction.reset();
}

/// Setzt die Position eines Punkts (Positions-Editor im HUD).
pub fn set_point_position(state: &mut AppState, point: PointRef, position: Vec3) {
    if state.track.point_position(point) == Some(position) {
        return;
    }
    if !state.track.contains(point) {
        log::debug!("Positionsänderung ignoriert: {:?} existiert nicht", point);
        return;
    }

    state.record_undo_snapshot();
    let track = state.track_mut();
    track.set_point_position(point, position);
    track.rebuild_curves();
}

/// Verschiebt einen Punkt um ein festes Delta (Pfeiltasten).
pub fn nudge_point(state: &mut AppState, point: PointRef, delta: Vec3) {
    let Some(current) = state.track.point_position(point) else {
        log::debug!("Nudge ignoriert: {:?} existiert nicht", point);
        return;
    };
    set_point_position(state, point, current + delta);
}

/// Ersetzt die Strecke durch die Start-Strecke.
pub fn reset_track(state: &mut AppState) {
    state.record_undo_snapshot();
    state.track = Arc::new(Track::default_track(state.options.curve_samples));
    state.selection.selected = None;
    state.selection.hovered = None;
    state.selection.hovered_axis = None;
    state.interaction.reset();
    log::info!("Strecke zurückgesetzt");
}

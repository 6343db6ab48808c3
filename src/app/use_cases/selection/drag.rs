//! Use-Case: Maus-Gesten im Viewport.
//!
//! Drücken legt die `DragStrategy` fest, Bewegung wendet sie an, Loslassen
//! beendet sie bedingungslos. Eine Geste unterhalb der Pixel-Schwelle gilt
//! als Klick.

use super::pick::{hovered_axis, pick_point};
use super::{clear_selection, select_point};
use crate::app::state::{DragStrategy, PointerGesture};
use crate::app::AppState;
use crate::core::{gizmo::axis_drag_offset, PointRef};
use glam::{Vec2, Vec3};

/// Beginnt eine Geste der primären Maustaste.
pub fn begin_gesture(state: &mut AppState, pos: Vec2) {
    state.interaction.reset();
    state.interaction.gesture = Some(PointerGesture::new(pos));
    if !state.view.has_viewport() {
        return;
    }

    let projection = state.view.projection();

    // Griff des Gizmos hat Vorrang vor erneutem Picking
    if let Some(target) = state.selection.selected {
        if let Some(axis) = hovered_axis(state, &projection, pos) {
            state.selection.hovered_axis = Some(axis);
            state.interaction.drag = DragStrategy::DragAxisHandle { target, axis };
            log::debug!("Achsen-Drag {:?} auf {:?}", axis, target);
            return;
        }
    }

    let Some(target) = pick_point(&state.track, &projection, pos, &state.options) else {
        return;
    };
    let Some(plane_origin) = state.track.point_position(target) else {
        return;
    };

    select_point(state, target);
    let plane_normal = state.view.camera.forward();
    let grab_offset = projection
        .screen_to_ray(pos)
        .intersect_plane(plane_origin, plane_normal)
        .map_or(Vec3::ZERO, |hit| plane_origin - hit);

    state.interaction.drag = DragStrategy::MovePointInPlane {
        target,
        plane_origin,
        plane_normal,
        grab_offset,
    };
}

/// Verarbeitet eine Mausbewegung bei gedrückter Taste.
pub fn update_gesture(state: &mut AppState, pos: Vec2) {
    let threshold = state.options.drag_threshold_px;
    let Some(gesture) = state.interaction.gesture.as_mut() else {
        return;
    };
    let was_drag = gesture.is_drag;
    let mut delta = gesture.advance(pos, threshold);
    if !gesture.is_drag {
        return;
    }
    // Bewegung unterhalb der Schwelle wird beim Übergang nachgeholt
    if !was_drag {
        delta = pos - gesture.down_pos;
    }

    match state.interaction.drag {
        DragStrategy::None => {
            state.view.camera.apply_look(delta.x, delta.y);
            state.view.active_viewpoint = None;
        }
        DragStrategy::MovePointInPlane {
            target,
            plane_origin,
            plane_normal,
            grab_offset,
        } => {
            if !state.view.has_viewport() {
                return;
            }
            let ray = state.view.projection().screen_to_ray(pos);
            let Some(hit) = ray.intersect_plane(plane_origin, plane_normal) else {
                log::debug!("Ebenen-Drag: kein Schnittpunkt, Frame übersprungen");
                return;
            };
            move_point(state, target, hit + grab_offset);
        }
        DragStrategy::DragAxisHandle { target, axis } => {
            let Some(current) = state.track.point_position(target) else {
                return;
            };
            let projection = state.view.projection();
            let Some(offset) =
                axis_drag_offset(&projection, current, axis, delta, &state.options.gizmo)
            else {
                log::debug!("Achse {:?} ohne Bildschirmrichtung, Frame übersprungen", axis);
                return;
            };
            move_point(state, target, current + offset);
        }
    }
}

/// Beendet die Geste. Ein Klick ins Leere hebt die Selektion auf.
pub fn end_gesture(state: &mut AppState, pos: Vec2) {
    if state.interaction.gesture.is_none() {
        return;
    }
    update_gesture(state, pos);

    let was_click = state
        .interaction
        .gesture
        .is_some_and(|gesture| !gesture.is_drag);
    if was_click && !state.interaction.drag.is_active() {
        clear_selection(state);
    }
    state.interaction.reset();
}

/// Setzt die Position des gezogenen Punkts; der erste Schritt einer Geste
/// legt den Undo-Snapshot an.
fn move_point(state: &mut AppState, target: PointRef, position: Vec3) {
    if !state.interaction.edit_recorded {
        state.record_undo_snapshot();
        state.interaction.edit_recorded = true;
    }
    let track = state.track_mut();
    if track.set_point_position(target, position) {
        track.rebuild_curves();
    }
}

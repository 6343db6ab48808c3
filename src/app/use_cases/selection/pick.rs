//! Use-Case: Punkt-Picking per Mausposition und Hover-Feedback.

use crate::app::AppState;
use crate::core::{check_axis_hover, Axis, PointRef, Projection, Track};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Pick-Radius eines Punkts in Pixeln (projizierte Weltgröße, nach unten begrenzt).
fn pick_radius(
    projection: &Projection,
    point: PointRef,
    position: glam::Vec3,
    options: &EditorOptions,
) -> f32 {
    let (world_radius, min_px) = if point.is_control() {
        (options.control_radius_world, options.control_pick_min_px)
    } else {
        (options.vertex_radius_world, options.vertex_pick_min_px)
    };
    projection
        .screen_radius_for_world_size(position, world_radius)
        .max(min_px)
}

/// Sucht den Punkt, der dem Mauszeiger am nächsten liegt.
///
/// Vertices werden vor Controls geprüft; ersetzt wird ein Kandidat nur durch
/// einen echt näheren, unabhängig von der Art des Punkts.
pub fn pick_point(
    track: &Track,
    projection: &Projection,
    mouse: Vec2,
    options: &EditorOptions,
) -> Option<PointRef> {
    let mut best: Option<(PointRef, f32)> = None;

    for (point, position) in track.points() {
        let projected = projection.world_to_screen(position);
        if !projected.is_visible() {
            continue;
        }
        let dist = projected.screen.distance(mouse);
        if dist > pick_radius(projection, point, position, options) {
            continue;
        }
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((point, dist)),
        }
    }

    best.map(|(point, _)| point)
}

/// Gizmo-Achse des selektierten Punkts unter dem Mauszeiger.
pub fn hovered_axis(state: &AppState, projection: &Projection, mouse: Vec2) -> Option<Axis> {
    let origin = state.selected_position()?;
    let ray = projection.screen_to_ray(mouse);
    check_axis_hover(projection, &ray, mouse, origin, &state.options.gizmo)
}

/// Aktualisiert Hover-Punkt und Hover-Achse für die aktuelle Mausposition.
pub fn update_hover(state: &mut AppState, pos: Option<Vec2>) {
    let Some(mouse) = pos.filter(|_| state.view.has_viewport()) else {
        state.selection.hovered = None;
        state.selection.hovered_axis = None;
        return;
    };

    let projection = state.view.projection();
    state.selection.hovered_axis = hovered_axis(state, &projection, mouse);
    state.selection.hovered = if state.selection.hovered_axis.is_some() {
        None
    } else {
        pick_point(&state.track, &projection, mouse, &state.options)
    };
}

//! Vertices und Kontrollpunkte als Kugeln.

use super::{Rgba, SceneSurface};
use crate::core::PointRef;
use crate::shared::RenderScene;

fn point_color(scene: &RenderScene, point: PointRef) -> Rgba {
    let options = &scene.options;
    if scene.selected == Some(point) {
        options.selected_color
    } else if scene.hovered == Some(point) {
        options.hover_color
    } else if point.is_control() {
        options.control_color
    } else {
        options.vertex_color
    }
}

/// Zeichnet alle Punkte; Selektion vor Hover vor Grundfarbe.
pub(crate) fn draw_points(scene: &RenderScene, surface: &mut impl SceneSurface) {
    let options = &scene.options;
    for (point, position) in scene.track.points() {
        let radius = if point.is_control() {
            options.control_radius_world
        } else {
            options.vertex_radius_world
        };
        surface.draw_sphere(position, radius, point_color(scene, point));
    }
}

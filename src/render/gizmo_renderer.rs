//! Achsen-Gizmo am selektierten Punkt.

use super::{Rgba, SceneSurface};
use crate::core::{gizmo::axis_segment, Axis};
use crate::shared::RenderScene;
use glam::Vec3;

const AXIS_COLORS: [Rgba; 3] = [
    [0.9, 0.2, 0.2, 1.0],
    [0.2, 0.9, 0.2, 1.0],
    [0.2, 0.4, 1.0, 1.0],
];
const HIGHLIGHT_COLOR: Rgba = [1.0, 0.9, 0.1, 1.0];

/// Farbe einer Achse; gezogene oder gehoverte Achse wird hervorgehoben.
pub(crate) fn axis_color(scene: &RenderScene, axis: Axis) -> Rgba {
    let active = scene.active_axis.or(scene.hovered_axis);
    if active == Some(axis) {
        HIGHLIGHT_COLOR
    } else {
        AXIS_COLORS[axis.index()]
    }
}

/// Zeichnet drei Achsenpfeile (Schaft + Kegelspitze).
pub(crate) fn draw_gizmo(scene: &RenderScene, origin: Vec3, surface: &mut impl SceneSurface) {
    let settings = &scene.options.gizmo;
    let head = settings.arrow_length * 0.2;
    for axis in Axis::ALL {
        let (start, end) = axis_segment(origin, axis, settings);
        let color = axis_color(scene, axis);
        let shaft_end = end - axis.unit() * head;
        surface.draw_line(start, shaft_end, 2.0, color);
        surface.draw_cone(shaft_end, end, head * 0.4, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::core::PointRef;
    use crate::render::test_support::RecordingSurface;

    #[test]
    fn hovered_axis_is_highlighted() {
        let mut state = AppState::new();
        state.selection.selected = Some(PointRef::vertex(1));
        state.selection.hovered_axis = Some(Axis::Y);
        let scene = build_render_scene(&state, [800.0, 600.0]);

        assert_eq!(axis_color(&scene, Axis::Y), HIGHLIGHT_COLOR);
        assert_eq!(axis_color(&scene, Axis::X), AXIS_COLORS[0]);
    }

    #[test]
    fn cone_tips_end_at_arrow_length() {
        let mut state = AppState::new();
        state.selection.selected = Some(PointRef::vertex(1));
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let origin = state.track.vertices()[1].position;
        let mut surface = RecordingSurface::default();

        draw_gizmo(&scene, origin, &mut surface);

        let length = scene.options.gizmo.arrow_length;
        assert_eq!(surface.cones[0].1, origin + Vec3::X * length);
        assert_eq!(surface.cones[2].1, origin + Vec3::Z * length);
    }
}

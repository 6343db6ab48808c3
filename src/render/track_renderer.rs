//! Kurven und Kontroll-Hilfslinien der Strecke.

use super::types::with_alpha;
use super::SceneSurface;
use crate::shared::RenderScene;

/// Zeichnet alle Bezier-Segmente als Polylinien.
pub(crate) fn draw_curves(scene: &RenderScene, surface: &mut impl SceneSurface) {
    let options = &scene.options;
    for curve in scene.track.curves() {
        for pair in curve.points.windows(2) {
            surface.draw_line(pair[0], pair[1], options.curve_width_px, options.curve_color);
        }
    }
}

/// Hilfslinien Vertex → Kontrollpunkt → Vertex.
pub(crate) fn draw_control_lines(scene: &RenderScene, surface: &mut impl SceneSurface) {
    let options = &scene.options;
    let color = options.control_line_color;
    for curve in scene.track.curves() {
        surface.draw_line(curve.start, curve.control, 1.0, color);
        surface.draw_line(curve.control, curve.end, 1.0, with_alpha(color, color[3] * 0.5));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::render::test_support::RecordingSurface;

    #[test]
    fn curves_produce_one_line_per_sample_step() {
        let state = AppState::new();
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut surface = RecordingSurface::default();

        draw_curves(&scene, &mut surface);

        let expected: usize = scene
            .track
            .curves()
            .iter()
            .map(|c| c.points.len() - 1)
            .sum();
        assert_eq!(surface.lines.len(), expected);
    }

    #[test]
    fn control_lines_touch_segment_endpoints() {
        let state = AppState::new();
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut surface = RecordingSurface::default();

        draw_control_lines(&scene, &mut surface);

        assert_eq!(surface.lines.len(), 4);
        assert_eq!(surface.lines[0].0, state.track.vertices()[0].position);
        assert_eq!(surface.lines[1].1, state.track.vertices()[1].position);
    }
}

//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        track: state.track.clone(),
        camera: state.view.camera.clone(),
        viewport_size,
        selected: state.selection.selected,
        hovered: state.selection.hovered,
        gizmo_origin: state.selected_position(),
        hovered_axis: state.selection.hovered_axis,
        active_axis: state.interaction.drag.axis(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::DragStrategy;
    use crate::app::AppState;
    use crate::core::{Axis, PointRef};

    #[test]
    fn gizmo_follows_selected_point() {
        let mut state = AppState::new();
        let scene = build(&state, [1280.0, 720.0]);
        assert!(scene.gizmo_origin.is_none());

        state.selection.selected = Some(PointRef::control(0));
        let scene = build(&state, [1280.0, 720.0]);
        assert_eq!(
            scene.gizmo_origin,
            state.track.point_position(PointRef::control(0))
        );
    }

    #[test]
    fn active_axis_comes_from_drag_strategy() {
        let mut state = AppState::new();
        state.selection.selected = Some(PointRef::vertex(1));
        state.interaction.drag = DragStrategy::DragAxisHandle {
            target: PointRef::vertex(1),
            axis: Axis::Z,
        };

        let scene = build(&state, [800.0, 600.0]);

        assert_eq!(scene.active_axis, Some(Axis::Z));
        assert!(std::sync::Arc::ptr_eq(&scene.track, &state.track));
    }
}

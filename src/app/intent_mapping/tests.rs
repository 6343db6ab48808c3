use crate::app::state::DragStrategy;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{Axis, PointRef};
use glam::{Vec2, Vec3};

use super::map_intent_to_commands;

#[test]
fn delete_selected_without_selection_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);

    assert!(commands.is_empty());
}

#[test]
fn delete_selected_targets_selected_control() {
    let mut state = AppState::new();
    state.selection.selected = Some(PointRef::control(1));

    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);

    assert_eq!(
        commands,
        vec![AppCommand::DeletePoint {
            point: PointRef::control(1)
        }]
    );
}

#[test]
fn nudge_maps_to_selected_point() {
    let mut state = AppState::new();
    state.selection.selected = Some(PointRef::vertex(2));
    let delta = Vec3::new(-5.0, 0.0, 0.0);

    let commands = map_intent_to_commands(&state, AppIntent::NudgeSelectedRequested { delta });

    assert_eq!(
        commands,
        vec![AppCommand::NudgePoint {
            point: PointRef::vertex(2),
            delta
        }]
    );
}

#[test]
fn unknown_viewpoint_is_ignored() {
    let state = AppState::new();

    assert!(
        map_intent_to_commands(&state, AppIntent::ViewpointSnapRequested { index: 7 }).is_empty()
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ViewpointSnapRequested { index: 3 }),
        vec![AppCommand::SnapToViewpoint { index: 3 }]
    );
}

#[test]
fn invalid_move_speed_is_rejected() {
    let state = AppState::new();

    assert!(
        map_intent_to_commands(&state, AppIntent::MoveSpeedChanged { speed: -1.0 }).is_empty()
    );
    assert!(
        map_intent_to_commands(&state, AppIntent::MoveSpeedChanged { speed: f32::NAN })
            .is_empty()
    );
}

#[test]
fn hover_is_frozen_while_dragging() {
    let mut state = AppState::new();
    let pos = Some(Vec2::new(10.0, 10.0));

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerHovered { pos }),
        vec![AppCommand::UpdateHover { pos }]
    );

    state.interaction.drag = DragStrategy::DragAxisHandle {
        target: PointRef::vertex(0),
        axis: Axis::X,
    };
    assert!(map_intent_to_commands(&state, AppIntent::PointerHovered { pos }).is_empty());
}

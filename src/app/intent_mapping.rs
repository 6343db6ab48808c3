//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{CameraTuning, VIEWPOINTS};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ImportRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ImportPathSelected { path } => vec![AppCommand::ImportTrack { path }],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportTrack { path }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FrameTick { movement } => vec![AppCommand::TickCamera { movement }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { delta } => vec![AppCommand::ZoomCamera { delta }],
        AppIntent::ViewpointSnapRequested { index } => {
            if index < VIEWPOINTS.len() {
                vec![AppCommand::SnapToViewpoint { index }]
            } else {
                log::debug!("Viewpoint {} existiert nicht", index);
                vec![]
            }
        }
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::MoveSpeedChanged { speed } => {
            if CameraTuning::is_valid_move_speed(speed) {
                vec![AppCommand::SetMoveSpeed { speed }]
            } else {
                vec![]
            }
        }

        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginPointerGesture { pos }],
        AppIntent::PointerDragged { pos } => vec![AppCommand::UpdatePointerGesture { pos }],
        AppIntent::PointerReleased { pos } => vec![AppCommand::EndPointerGesture { pos }],
        AppIntent::PointerHovered { pos } => {
            // Während eines Zugs bleibt der Hover-Zustand eingefroren
            if state.interaction.drag.is_active() {
                vec![]
            } else {
                vec![AppCommand::UpdateHover { pos }]
            }
        }

        AppIntent::PointSelectRequested { point } => vec![AppCommand::SelectPoint { point }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::AddVertexRequested { position } => vec![AppCommand::AddVertex { position }],
        AppIntent::DeletePointRequested { point } => vec![AppCommand::DeletePoint { point }],
        AppIntent::DeleteSelectedRequested => match state.selection.selected {
            Some(point) => vec![AppCommand::DeletePoint { point }],
            None => vec![],
        },
        AppIntent::UpdatePointPositionRequested { point, position } => {
            vec![AppCommand::SetPointPosition { point, position }]
        }
        AppIntent::NudgeSelectedRequested { delta } => match state.selection.selected {
            Some(point) => vec![AppCommand::NudgePoint { point, delta }],
            None => vec![],
        },
        AppIntent::ResetTrackRequested => vec![AppCommand::ResetTrack],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}

#[cfg(test)]
mod tests;

//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::ImportTrack { path } => handlers::file_io::import(state, path)?,
            AppCommand::ExportTrack { path } => handlers::file_io::export(state, path)?,

            // === Anwendungssteuerung ===
            AppCommand::SaveOptions => handlers::app::save_options(state)?,
            AppCommand::RequestExit => handlers::app::request_exit(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::TickCamera { movement } => handlers::view::tick(state, movement),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { delta } => handlers::view::zoom(state, delta),
            AppCommand::SnapToViewpoint { index } => {
                handlers::view::snap_to_viewpoint(state, index)
            }
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetMoveSpeed { speed } => handlers::view::set_move_speed(state, speed),

            // === Viewport-Interaktion ===
            AppCommand::BeginPointerGesture { pos } => {
                handlers::selection::begin_gesture(state, pos)
            }
            AppCommand::UpdatePointerGesture { pos } => {
                handlers::selection::update_gesture(state, pos)
            }
            AppCommand::EndPointerGesture { pos } => handlers::selection::end_gesture(state, pos),
            AppCommand::UpdateHover { pos } => handlers::selection::update_hover(state, pos),

            // === Selektion ===
            AppCommand::SelectPoint { point } => handlers::selection::select_point(state, point),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::AddVertex { position } => handlers::editing::add_vertex(state, position),
            AppCommand::DeletePoint { point } => handlers::editing::delete_point(state, point),
            AppCommand::SetPointPosition { point, position } => {
                handlers::editing::set_point_position(state, point, position)
            }
            AppCommand::NudgePoint { point, delta } => {
                handlers::editing::nudge_point(state, point, delta)
            }
            AppCommand::ResetTrack => handlers::editing::reset_track(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}

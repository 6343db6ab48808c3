//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState};
use crate::core::VIEWPOINTS;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import...").clicked() {
                    events.push(AppIntent::ImportRequested);
                    ui.close();
                }

                if ui.button("Export...").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Save options").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo (Ctrl+Y / Shift+Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Add vertex (N)").clicked() {
                    events.push(AppIntent::AddVertexRequested { position: None });
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.selection.selected.is_some(),
                        egui::Button::new("Delete selected (Del)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                if ui.button("Reset track (R)").clicked() {
                    events.push(AppIntent::ResetTrackRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                for (index, viewpoint) in VIEWPOINTS.iter().enumerate() {
                    let label = format!("{} ({})", viewpoint.name, index + 1);
                    let active = state.view.active_viewpoint == Some(index);
                    if ui.selectable_label(active, label).clicked() {
                        events.push(AppIntent::ViewpointSnapRequested { index });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Reset camera (Home)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
            });
        });
    });

    events
}

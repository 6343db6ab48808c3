//! HUD-Panel (rechte Seitenleiste): Punktlisten, Positions-Editor, Kamera.

mod point_editor;
mod point_list;

use crate::app::{AppIntent, AppState};
use crate::core::VIEWPOINTS;

/// Rendert das HUD-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let track = state.track.clone();
    let selected = state.selection.selected;
    let move_speed = state.view.camera.tuning.move_speed;
    let active_viewpoint = state.view.active_viewpoint;

    egui::SidePanel::right("properties_panel")
        .default_width(260.0)
        .min_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Strecke");
            ui.horizontal(|ui| {
                if ui.button("Vertex hinzufügen").clicked() {
                    events.push(AppIntent::AddVertexRequested { position: None });
                }
                if ui.button("Zurücksetzen").clicked() {
                    events.push(AppIntent::ResetTrackRequested);
                }
            });
            ui.separator();

            point_editor::render(ui, &track, selected, &mut state.ui.point_editor, &mut events);
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - 140.0).max(100.0))
                .show(ui, |ui| {
                    point_list::render_vertices(ui, &track, selected, &mut events);
                    ui.separator();
                    point_list::render_controls(ui, &track, selected, &mut events);
                });

            ui.separator();
            render_camera_section(ui, move_speed, active_viewpoint, &mut events);
        });

    events
}

fn render_camera_section(
    ui: &mut egui::Ui,
    move_speed: f32,
    active_viewpoint: Option<usize>,
    events: &mut Vec<AppIntent>,
) {
    ui.heading("Kamera");

    let mut speed = move_speed;
    let response = ui.add(egui::Slider::new(&mut speed, 1.0..=100.0).text("Tempo"));
    if response.changed() {
        events.push(AppIntent::MoveSpeedChanged { speed });
    }

    ui.horizontal_wrapped(|ui| {
        for (index, viewpoint) in VIEWPOINTS.iter().enumerate() {
            let active = active_viewpoint == Some(index);
            if ui.selectable_label(active, viewpoint.name).clicked() {
                events.push(AppIntent::ViewpointSnapRequested { index });
            }
        }
    });

    if ui.button("Kamera zurücksetzen").clicked() {
        events.push(AppIntent::ResetCameraRequested);
    }
}

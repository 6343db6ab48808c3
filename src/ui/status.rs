//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::{viewpoint, PointKind};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Vertices: {} | Segmente: {}",
                state.vertex_count(),
                state.segment_count()
            ));

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Kamera: ({:.0}, {:.0}, {:.0}) | Yaw {:.1}° | Pitch {:.1}°",
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.yaw.to_degrees(),
                camera.pitch.to_degrees()
            ));

            ui.separator();

            let viewpoint_name = state
                .view
                .active_viewpoint
                .and_then(viewpoint)
                .map_or("frei", |vp| vp.name);
            ui.label(format!("Viewpoint: {}", viewpoint_name));

            ui.separator();

            ui.label(selection_label(state));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

/// Text der Selektionsanzeige; nennt die gezogene bzw. gehoverte Gizmo-Achse.
fn selection_label(state: &AppState) -> String {
    let Some(point) = state.selection.selected else {
        return "Selektiert: -".to_string();
    };
    let kind = match point.kind {
        PointKind::Vertex => "Vertex",
        PointKind::Control => "Kontrollpunkt",
    };
    let axis = state
        .interaction
        .drag
        .axis()
        .or(state.selection.hovered_axis);
    match axis {
        Some(axis) => format!("Selektiert: {} {} | Achse {}", kind, point.index, axis.label()),
        None => format!("Selektiert: {} {}", kind, point.index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DragStrategy;
    use crate::core::{Axis, PointRef};

    #[test]
    fn selection_label_names_dragged_axis() {
        let mut state = AppState::new();
        assert_eq!(selection_label(&state), "Selektiert: -");

        state.selection.selected = Some(PointRef::control(1));
        assert_eq!(selection_label(&state), "Selektiert: Kontrollpunkt 1");

        state.interaction.drag = DragStrategy::DragAxisHandle {
            target: PointRef::control(1),
            axis: Axis::Z,
        };
        assert_eq!(selection_label(&state), "Selektiert: Kontrollpunkt 1 | Achse Z");
    }
}

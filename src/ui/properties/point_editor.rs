//! Editierbare x/y/z-Felder für den selektierten Punkt.

use crate::app::state::PointEditorBuffer;
use crate::app::AppIntent;
use crate::core::{PointRef, Track};

/// Lädt die Werte neu, sobald sich die Selektion ändert.
pub(super) fn sync_buffer(buffer: &mut PointEditorBuffer, track: &Track, selected: Option<PointRef>) {
    if buffer.target == selected {
        return;
    }
    buffer.target = selected;
    buffer.values = selected
        .and_then(|point| track.point_position(point))
        .unwrap_or_default();
}

pub(super) fn render(
    ui: &mut egui::Ui,
    track: &Track,
    selected: Option<PointRef>,
    buffer: &mut PointEditorBuffer,
    events: &mut Vec<AppIntent>,
) {
    sync_buffer(buffer, track, selected);

    let Some(point) = selected.filter(|&p| track.contains(p)) else {
        ui.label("Keine Selektion");
        return;
    };

    let title = if point.is_control() {
        format!("Kontrollpunkt {}", point.index)
    } else {
        format!("Vertex {}", point.index)
    };
    ui.label(title);

    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(&mut buffer.values.x).prefix("x ").speed(1.0));
        ui.add(egui::DragValue::new(&mut buffer.values.y).prefix("y ").speed(1.0));
        ui.add(egui::DragValue::new(&mut buffer.values.z).prefix("z ").speed(1.0));
    });

    ui.horizontal(|ui| {
        if ui.button("Übernehmen").clicked() {
            events.push(AppIntent::UpdatePointPositionRequested {
                point,
                position: buffer.values,
            });
        }
        if ui.button("Verwerfen").clicked() {
            buffer.target = None;
        }
    });
}

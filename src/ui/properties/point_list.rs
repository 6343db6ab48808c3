//! Listen der Vertices und Kontrollpunkte.

use crate::app::AppIntent;
use crate::core::{PointRef, Track};
use glam::Vec3;

fn coords(p: Vec3) -> String {
    format!("({:.0}, {:.0}, {:.0})", p.x, p.y, p.z)
}

/// Vertex-Liste mit Auswahl und Löschen je Zeile.
pub(super) fn render_vertices(
    ui: &mut egui::Ui,
    track: &Track,
    selected: Option<PointRef>,
    events: &mut Vec<AppIntent>,
) {
    ui.label(format!("Vertices ({})", track.vertex_count()));
    for (i, vertex) in track.vertices().iter().enumerate() {
        let point = PointRef::vertex(i);
        ui.horizontal(|ui| {
            let label = format!("V{} {}", i, coords(vertex.position));
            if ui.selectable_label(selected == Some(point), label).clicked() {
                events.push(AppIntent::PointSelectRequested { point });
            }
            if ui.small_button("✖").on_hover_text("Löschen").clicked() {
                events.push(AppIntent::DeletePointRequested { point });
            }
        });
    }
}

/// Kontrollpunkt-Liste mit Auswahl und Zurücksetzen je Zeile.
pub(super) fn render_controls(
    ui: &mut egui::Ui,
    track: &Track,
    selected: Option<PointRef>,
    events: &mut Vec<AppIntent>,
) {
    ui.label(format!("Kontrollpunkte ({})", track.segment_count()));
    for (i, slot) in track.controls().iter().enumerate() {
        let Some(control) = slot else {
            continue;
        };
        let point = PointRef::control(i);
        ui.horizontal(|ui| {
            let label = format!("C{} {}", i, coords(control.position));
            if ui.selectable_label(selected == Some(point), label).clicked() {
                events.push(AppIntent::PointSelectRequested { point });
            }
            if ui
                .small_button("⟲")
                .on_hover_text("Auf Mittelpunkt zurücksetzen")
                .clicked()
            {
                events.push(AppIntent::DeletePointRequested { point });
            }
        });
    }
}

//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::io::{parse_track_document, write_track_document, TrackDocument};
use crate::shared::EditorOptions;
use anyhow::Context;
use std::sync::Arc;

/// Öffnet den Import-Dialog über UI-State.
pub fn request_import(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Öffnet den Export-Dialog über UI-State.
pub fn request_export(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Importiert eine Strecke (und ggf. die Kamera) aus einer JSON-Datei.
///
/// Bei einem Fehler bleibt der Zustand unverändert.
pub fn import_track(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei '{}' nicht lesbar", path))?;
    let document = parse_track_document(&text)?;
    apply_document(state, &document);

    log::info!(
        "Strecke importiert: {} Vertices, {} Segmente aus {}",
        state.vertex_count(),
        state.segment_count(),
        path
    );
    state.ui.status_message = Some(format!("Importiert: {}", path));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Übernimmt ein gelesenes Dokument in den State.
pub fn apply_document(state: &mut AppState, document: &TrackDocument) {
    state.record_undo_snapshot();
    state.track = Arc::new(document.to_track(state.options.curve_samples));
    state.selection.selected = None;
    state.selection.hovered = None;
    state.selection.hovered_axis = None;
    state.interaction.reset();

    if let Some(meta) = document.meta {
        meta.camera.apply_to(&mut state.view.camera);
        state.view.camera.tuning.set_move_speed(meta.move_speed);
        state.options.camera.move_speed = state.view.camera.tuning.move_speed;
        state.view.active_viewpoint = None;
    }
}

/// Exportiert Strecke und Kamera als JSON-Datei.
pub fn export_track(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let document = TrackDocument::capture(&state.track, &state.view.camera);
    let json = write_track_document(&document)?;
    std::fs::write(&path, json).with_context(|| format!("Datei '{}' nicht schreibbar", path))?;

    log::info!(
        "Strecke exportiert: {} Vertices nach {}",
        state.vertex_count(),
        path
    );
    state.ui.status_message = Some(format!("Exportiert: {}", path));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Speichert die Laufzeit-Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)?;
    log::info!("Optionen gespeichert: {}", path.display());
    state.ui.status_message = Some("Optionen gespeichert".to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointRef;
    use glam::Vec3;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("coaster_{}_{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn export_then_import_restores_track_and_camera() {
        let path = temp_path("roundtrip");
        let mut state = AppState::new();
        state.view.camera.position = Vec3::new(10.0, 20.0, 30.0);
        state.view.camera.yaw = 0.5;
        export_track(&mut state, path.clone()).expect("Export fehlgeschlagen");

        let mut other = AppState::new();
        other.track_mut().add_vertex(Vec3::ONE);
        other.selection.selected = Some(PointRef::vertex(3));
        import_track(&mut other, path.clone()).expect("Import fehlgeschlagen");

        assert_eq!(other.track.vertices(), state.track.vertices());
        assert_eq!(other.view.camera.position, Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(other.view.camera.yaw, 0.5);
        assert!(other.selection.selected.is_none());
        assert_eq!(other.ui.current_file_path.as_deref(), Some(path.as_str()));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn invalid_json_leaves_state_untouched() {
        let path = temp_path("invalid");
        std::fs::write(&path, "{ not json").expect("Testdatei nicht schreibbar");
        let mut state = AppState::new();

        let result = import_track(&mut state, path.clone());

        assert!(result.is_err());
        assert_eq!(state.vertex_count(), 3);
        assert!(!state.can_undo());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut state = AppState::new();
        assert!(import_track(&mut state, temp_path("does_not_exist")).is_err());
    }

    #[test]
    fn document_without_meta_keeps_camera() {
        let mut state = AppState::new();
        state.view.camera.position = Vec3::new(1.0, 2.0, 3.0);
        let document =
            parse_track_document(r#"{"vertices":[{"x":0,"y":0,"z":0},{"x":1,"y":0,"z":0}]}"#)
                .expect("gültiges Dokument");

        apply_document(&mut state, &document);

        assert_eq!(state.vertex_count(), 2);
        assert_eq!(state.segment_count(), 1);
        assert_eq!(state.view.camera.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn negative_move_speed_in_document_is_ignored() {
        let mut state = AppState::new();
        let speed = state.view.camera.tuning.move_speed;
        let document = parse_track_document(
            r#"{"vertices":[],"meta":{"camera":{"x":0,"y":0,"z":500,"yaw":0,"pitch":0},"moveSpeed":-5}}"#,
        )
        .expect("gültiges Dokument");

        apply_document(&mut state, &document);

        assert_eq!(state.view.camera.position, Vec3::new(0.0, 0.0, 500.0));
        assert_eq!(state.view.camera.tuning.move_speed, speed);
        assert_eq!(state.options.camera.move_speed, speed);

        let start_z = state.view.camera.position.z;
        let forward = crate::core::MovementInput {
            forward: true,
            ..Default::default()
        };
        let mut last_z = start_z;
        for _ in 0..6 {
            state.view.camera.tick(forward);
            assert!(state.view.camera.position.z < last_z);
            last_z = state.view.camera.position.z;
        }
    }

    #[test]
    fn request_flags_open_dialogs() {
        let mut state = AppState::new();
        request_import(&mut state);
        request_export(&mut state);
        assert!(state.ui.show_import_dialog);
        assert!(state.ui.show_export_dialog);
    }
}

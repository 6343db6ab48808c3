use crate::app::{AppIntent, UiState};

const DEFAULT_FILE_NAME: &str = "coaster_track.json";

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Import-Dialog
    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Coaster Track", &["json"])
            .pick_file()
        {
            events.push(AppIntent::ImportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Export-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let default_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Coaster Track", &["json"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

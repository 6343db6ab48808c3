//! Handler für Datei-Operationen (Import, Export, Dialoge).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Import-Dialog.
pub fn request_import(state: &mut AppState) {
    use_cases::file_io::request_import(state);
}

/// Öffnet den Export-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::file_io::request_export(state);
}

/// Importiert eine Strecke aus der gewählten Datei.
pub fn import(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::import_track(state, path)
}

/// Exportiert die Strecke in die gewählte Datei.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::export_track(state, path)
}

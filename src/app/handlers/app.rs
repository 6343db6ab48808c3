//! Handler für Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_options(state)
}

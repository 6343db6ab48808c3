//! Use-Case-Funktionen für den Sitzungsspeicher.

use crate::app::AppState;
use crate::core::Track;
use crate::io::{load_session, save_session, KeyValueStore};
use std::sync::Arc;

/// Stellt Strecke und Kamera aus dem Speicher wieder her.
///
/// Ohne gespeicherte Strecke bleibt die Start-Strecke aktiv.
pub fn restore_session(state: &mut AppState, store: &(impl KeyValueStore + ?Sized)) {
    let session = load_session(store);
    let samples = state.options.curve_samples;

    match session.track(samples) {
        Some(track) => {
            log::info!(
                "Sitzung wiederhergestellt: {} Vertices",
                track.vertex_count()
            );
            state.track = Arc::new(track);
        }
        None => {
            log::info!("Keine gespeicherte Strecke, Start-Strecke aktiv");
            state.track = Arc::new(Track::default_track(samples));
        }
    }

    session.apply_camera(&mut state.view.camera);
    state.options.camera.move_speed = state.view.camera.tuning.move_speed;
    state.selection.clear();
    state.interaction.reset();
    state.history.clear();
}

/// Schreibt Strecke und Kamera in den Speicher.
pub fn persist_session(state: &AppState, store: &mut (impl KeyValueStore + ?Sized)) {
    let written = save_session(store, &state.track, &state.view.camera);
    log::debug!("Sitzung gespeichert: {} Schlüssel", written);
}

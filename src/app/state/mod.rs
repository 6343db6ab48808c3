//! Application State: zentrale Datenhaltung.

mod interaction;
mod selection;
mod view;

pub use interaction::{DragStrategy, InteractionState, PointerGesture};
pub use selection::SelectionState;
pub use view::ViewState;

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{PointRef, Track};
use crate::shared::EditorOptions;
use glam::Vec3;
use std::sync::Arc;

/// Eingabepuffer des Positions-Editors im HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointEditorBuffer {
    /// Punkt, zu dem die Werte gehören
    pub target: Option<PointRef>,
    /// Bearbeitete Koordinaten (x, y, z)
    pub values: Vec3,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Import-Dialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Ob der Export-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Pfad der zuletzt importierten/exportierten Datei
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
    /// Positions-Editor des HUD
    pub point_editor: PointEditorBuffer,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Strecke (Arc für O(1)-Snapshots)
    pub track: Arc<Track>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Maus-Geste und Zieh-Strategie
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen und Start-Strecke.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen und Start-Strecke.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            track: Arc::new(Track::default_track(options.curve_samples)),
            view: ViewState::new(options.camera),
            ui: UiState::new(),
            selection: SelectionState::new(),
            interaction: InteractionState::default(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_capacity),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Vertices zurück (für UI-Anzeige)
    pub fn vertex_count(&self) -> usize {
        self.track.vertex_count()
    }

    /// Gibt die Anzahl der Kurvensegmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.track.curves().len()
    }

    /// Mutable Strecke (CoW: klont nur, wenn ein Snapshot sie noch hält).
    #[inline]
    pub fn track_mut(&mut self) -> &mut Track {
        Arc::make_mut(&mut self.track)
    }

    /// Position des selektierten Punkts.
    pub fn selected_position(&self) -> Option<Vec3> {
        self.selection
            .selected
            .and_then(|point| self.track.point_position(point))
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

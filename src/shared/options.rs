//! Zentrale Konfiguration für den Coaster Track Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CameraTuning, GizmoSettings, DEFAULT_CURVE_SAMPLES};
use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Welt-Radius der Vertex-Kugel (Darstellung und Pick-Bereich).
pub const VERTEX_RADIUS_WORLD: f32 = 15.0;
/// Welt-Radius der Kontrollpunkt-Kugel.
pub const CONTROL_RADIUS_WORLD: f32 = 8.0;
/// Minimaler Pick-Radius eines Vertex in Pixeln.
pub const VERTEX_PICK_MIN_PX: f32 = 8.0;
/// Minimaler Pick-Radius eines Kontrollpunkts in Pixeln.
pub const CONTROL_PICK_MIN_PX: f32 = 12.0;
/// Mausweg in Pixeln, ab dem ein Klick als Ziehen gilt.
pub const DRAG_THRESHOLD_PX: f32 = 4.0;

// ── Editing ─────────────────────────────────────────────────────────

/// Pfeiltasten-Schritt in Welteinheiten.
pub const NUDGE_STEP: f32 = 5.0;
/// Pfeiltasten-Schritt mit Shift.
pub const NUDGE_STEP_FAST: f32 = 10.0;
/// Abstand neuer Vertices vor der Kamera.
pub const ADD_VERTEX_DISTANCE: f32 = 300.0;
/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_CAPACITY: usize = 50;

// ── Farben ──────────────────────────────────────────────────────────

/// Vertex-Farbe (RGBA: Hellblau).
pub const VERTEX_COLOR: [f32; 4] = [0.39, 0.78, 1.0, 1.0];
/// Kontrollpunkt-Farbe (RGBA: Orange).
pub const CONTROL_COLOR: [f32; 4] = [1.0, 0.78, 0.39, 1.0];
/// Farbe selektierter Punkte (RGBA: Rot).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.39, 0.39, 1.0];
/// Farbe von Punkten unter dem Mauszeiger (RGBA: Weiß).
pub const HOVER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Kurvenfarbe (RGBA: Grün).
pub const CURVE_COLOR: [f32; 4] = [0.39, 0.78, 0.39, 1.0];
/// Farbe der Hilfslinien zum Kontrollpunkt.
pub const CONTROL_LINE_COLOR: [f32; 4] = [1.0, 0.59, 0.0, 0.6];
/// Hintergrundfarbe des Viewports.
pub const BACKGROUND_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `coaster_track_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Trägheit, Geschwindigkeit und Snap der Kamera
    pub camera: CameraTuning,

    // ── Gizmo ───────────────────────────────────────────────────
    /// Pfeil-Länge, Hover-Schwellen und Zieh-Empfindlichkeit
    pub gizmo: GizmoSettings,

    // ── Picking ─────────────────────────────────────────────────
    pub vertex_radius_world: f32,
    pub control_radius_world: f32,
    pub vertex_pick_min_px: f32,
    pub control_pick_min_px: f32,
    pub drag_threshold_px: f32,

    // ── Editing ─────────────────────────────────────────────────
    pub nudge_step: f32,
    pub nudge_step_fast: f32,
    /// Abstand neuer Vertices vor der Kamera
    pub add_vertex_distance: f32,
    /// Liniensegmente pro Bezier-Kurve
    pub curve_samples: usize,
    pub history_capacity: usize,

    // ── Darstellung ─────────────────────────────────────────────
    pub vertex_color: [f32; 4],
    pub control_color: [f32; 4],
    pub selected_color: [f32; 4],
    pub hover_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub control_line_color: [f32; 4],
    pub background_color: [f32; 4],
    /// Linienstärke der Kurven in Pixeln
    pub curve_width_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera: CameraTuning::default(),
            gizmo: GizmoSettings::default(),

            vertex_radius_world: VERTEX_RADIUS_WORLD,
            control_radius_world: CONTROL_RADIUS_WORLD,
            vertex_pick_min_px: VERTEX_PICK_MIN_PX,
            control_pick_min_px: CONTROL_PICK_MIN_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,

            nudge_step: NUDGE_STEP,
            nudge_step_fast: NUDGE_STEP_FAST,
            add_vertex_distance: ADD_VERTEX_DISTANCE,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            history_capacity: HISTORY_CAPACITY,

            vertex_color: VERTEX_COLOR,
            control_color: CONTROL_COLOR,
            selected_color: SELECTED_COLOR,
            hover_color: HOVER_COLOR,
            curve_color: CURVE_COLOR,
            control_line_color: CONTROL_LINE_COLOR,
            background_color: BACKGROUND_COLOR,
            curve_width_px: 3.0,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("coaster_track_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("coaster_track_editor.toml")
    }

    /// Pfeiltasten-Schritt je nach Shift-Zustand.
    pub fn nudge_step_for(&self, fast: bool) -> f32 {
        if fast {
            self.nudge_step_fast
        } else {
            self.nudge_step
        }
    }
}

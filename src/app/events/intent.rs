use crate::core::{MovementInput, PointRef};
use glam::{Vec2, Vec3};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Die HUD-Einträge (`PointSelectRequested`, `DeletePointRequested`,
/// `UpdatePointPositionRequested`, …) bilden die Befehlsschnittstelle, über
/// die eine beliebige Oberfläche den Kern steuert.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // ── Datei & Anwendung ───────────────────────────────────────
    /// JSON-Import anfordern (zeigt Dateidialog)
    ImportRequested,
    /// JSON-Export anfordern (zeigt Dateidialog)
    ExportRequested,
    /// Import-Datei gewählt
    ImportPathSelected { path: String },
    /// Export-Ziel gewählt
    ExportPathSelected { path: String },
    /// Aktuelle Optionen als TOML speichern
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,

    // ── Kamera & Viewport ───────────────────────────────────────
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ein Simulationsschritt mit den gehaltenen Bewegungstasten
    FrameTick { movement: MovementInput },
    /// Kamera in der Bildebene verschieben (Pixel-Delta)
    CameraPan { delta: Vec2 },
    /// Dolly entlang der Blickrichtung (Mausrad-Delta)
    CameraZoom { delta: f32 },
    /// Zu einem Preset springen (Tasten 1–4)
    ViewpointSnapRequested { index: usize },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Maximale Fluggeschwindigkeit ändern (HUD-Slider)
    MoveSpeedChanged { speed: f32 },

    // ── Maus im Viewport (primäre Taste) ────────────────────────
    PointerPressed { pos: Vec2 },
    PointerDragged { pos: Vec2 },
    PointerReleased { pos: Vec2 },
    /// Mausposition über dem Viewport (`None` = außerhalb)
    PointerHovered { pos: Option<Vec2> },

    // ── HUD-Befehle ─────────────────────────────────────────────
    /// Listeneintrag angeklickt
    PointSelectRequested { point: PointRef },
    ClearSelectionRequested,
    /// Vertex anhängen; ohne Position vor der Kamera
    AddVertexRequested { position: Option<Vec3> },
    /// Vertex löschen bzw. Kontrollpunkt zurücksetzen
    DeletePointRequested { point: PointRef },
    /// Selektierten Punkt löschen/zurücksetzen (Entf/Backspace)
    DeleteSelectedRequested,
    /// Positions-Editor: Übernehmen
    UpdatePointPositionRequested { point: PointRef, position: Vec3 },
    /// Pfeiltasten: selektierten Punkt verschieben
    NudgeSelectedRequested { delta: Vec3 },
    /// Start-Strecke wiederherstellen
    ResetTrackRequested,

    // ── History ─────────────────────────────────────────────────
    UndoRequested,
    RedoRequested,
}

use crate::core::{MovementInput, PointRef};
use glam::{Vec2, Vec3};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Datei & Anwendung ───────────────────────────────────────
    RequestImportDialog,
    RequestExportDialog,
    ImportTrack { path: String },
    ExportTrack { path: String },
    SaveOptions,
    RequestExit,

    // ── Kamera & Viewport ───────────────────────────────────────
    SetViewportSize { size: [f32; 2] },
    TickCamera { movement: MovementInput },
    PanCamera { delta: Vec2 },
    ZoomCamera { delta: f32 },
    SnapToViewpoint { index: usize },
    ResetCamera,
    SetMoveSpeed { speed: f32 },

    // ── Viewport-Interaktion ────────────────────────────────────
    /// Pick bzw. Gizmo-Test und Wahl der Zieh-Strategie
    BeginPointerGesture { pos: Vec2 },
    /// Ziehen oder Umsehen mit der neuen Mausposition
    UpdatePointerGesture { pos: Vec2 },
    /// Geste beenden; ein Klick ins Leere hebt die Selektion auf
    EndPointerGesture { pos: Vec2 },
    /// Hover-Punkt und Hover-Achse neu bestimmen
    UpdateHover { pos: Option<Vec2> },

    // ── Selektion ───────────────────────────────────────────────
    SelectPoint { point: PointRef },
    ClearSelection,

    // ── Editing ─────────────────────────────────────────────────
    AddVertex { position: Option<Vec3> },
    DeletePoint { point: PointRef },
    SetPointPosition { point: PointRef, position: Vec3 },
    NudgePoint { point: PointRef, delta: Vec3 },
    ResetTrack,

    // ── History ─────────────────────────────────────────────────
    Undo,
    Redo,
}

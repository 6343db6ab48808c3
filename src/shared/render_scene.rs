//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Axis, Camera3D, PointRef, Projection, Track};
use glam::{Vec2, Vec3};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Die aktuelle Strecke (Arc für O(1)-Clone pro Frame)
    pub track: Arc<Track>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Selektierter Punkt
    pub selected: Option<PointRef>,
    /// Punkt unter dem Mauszeiger
    pub hovered: Option<PointRef>,
    /// Ursprung des Achsen-Gizmos (Position des selektierten Punkts)
    pub gizmo_origin: Option<Vec3>,
    /// Gizmo-Achse unter dem Mauszeiger
    pub hovered_axis: Option<Axis>,
    /// Gerade gezogene Gizmo-Achse
    pub active_axis: Option<Axis>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Projektion dieses Frames (gleiche Basis wie beim Picking).
    pub fn projection(&self) -> Projection {
        Projection::from_camera(&self.camera, Vec2::from(self.viewport_size))
    }

    /// Gibt zurück, ob eine Strecke mit Punkten vorhanden ist.
    pub fn has_track(&self) -> bool {
        !self.track.is_empty()
    }
}

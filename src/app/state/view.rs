use crate::core::{Camera3D, CameraTuning, Projection};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// 3D-Kamera für die Ansicht
    pub camera: Camera3D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Zuletzt angesprungenes Preset (Index in `VIEWPOINTS`)
    pub active_viewpoint: Option<usize>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(tuning: CameraTuning) -> Self {
        Self {
            camera: Camera3D::new(tuning),
            viewport_size: [0.0, 0.0],
            active_viewpoint: None,
        }
    }

    /// Projektion des aktuellen Frames.
    pub fn projection(&self) -> Projection {
        Projection::from_camera(&self.camera, Vec2::from(self.viewport_size))
    }

    /// Viewport hat eine nutzbare Größe.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size[0] >= 1.0 && self.viewport_size[1] >= 1.0
    }
}

//! Benannte Kamera-Presets.

use glam::Vec3;

/// Unveränderliches Kamera-Preset: Position plus Blickziel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub name: &'static str,
    pub position: Vec3,
    pub target: Vec3,
}

impl Viewpoint {
    pub const fn new(name: &'static str, position: Vec3, target: Vec3) -> Self {
        Self {
            name,
            position,
            target,
        }
    }
}

/// Standard-Presets, erreichbar über die Tasten 1–4.
pub const VIEWPOINTS: [Viewpoint; 4] = [
    Viewpoint::new("Front", Vec3::new(0.0, 0.0, 1000.0), Vec3::ZERO),
    Viewpoint::new("Top", Vec3::new(0.0, -800.0, 0.0), Vec3::ZERO),
    Viewpoint::new("Side", Vec3::new(1000.0, 0.0, 0.0), Vec3::ZERO),
    Viewpoint::new("Isometric", Vec3::new(600.0, -600.0, 600.0), Vec3::ZERO),
];

/// Preset per Index, `None` außerhalb des Bereichs.
pub fn viewpoint(index: usize) -> Option<&'static Viewpoint> {
    VIEWPOINTS.get(index)
}

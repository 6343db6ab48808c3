//! Achsen-Gizmo: Hover-Test und achsgebundenes Ziehen.

use super::math::{point_to_segment_distance_2d, ray_to_segment_distance_3d, Ray};
use super::projection::Projection;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Welt-Achse eines Gizmo-Griffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Alle Achsen in Prüfreihenfolge.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Einheitsvektor der Achse.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Index 0=X, 1=Y, 2=Z.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Einstellbare Gizmo-Parameter (Teil der `EditorOptions`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    /// Pfeil-Länge in Welteinheiten
    pub arrow_length: f32,
    /// Maximaler Strahl-Abstand zur Achse in Welteinheiten
    pub world_threshold: f32,
    /// Maximaler Bildschirm-Abstand zur projizierten Achse in Pixeln
    pub pixel_threshold: f32,
    /// Welteinheiten pro Pixel beim Ziehen entlang einer Achse
    pub drag_sensitivity: f32,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            arrow_length: 80.0,
            world_threshold: 10.0,
            pixel_threshold: 10.0,
            drag_sensitivity: 1.0,
        }
    }
}

/// Welt-Segment des Griffs einer Achse.
pub fn axis_segment(origin: Vec3, axis: Axis, settings: &GizmoSettings) -> (Vec3, Vec3) {
    (origin, origin + axis.unit() * settings.arrow_length)
}

/// Liefert die erste Achse, deren Griff unter dem Mauszeiger liegt.
///
/// Zwei Schwellen: erst der Strahl-Abstand im Raum, dann der Pixel-Abstand
/// zur projizierten Achse. Achsen mit unsichtbaren Endpunkten werden
/// übersprungen.
pub fn check_axis_hover(
    projection: &Projection,
    ray: &Ray,
    mouse: Vec2,
    origin: Vec3,
    settings: &GizmoSettings,
) -> Option<Axis> {
    Axis::ALL.into_iter().find(|&axis| {
        let (start, end) = axis_segment(origin, axis, settings);
        let world_dist = ray_to_segment_distance_3d(ray.origin, ray.direction, start, end);
        if world_dist >= settings.world_threshold {
            return false;
        }
        let a = projection.world_to_screen(start);
        let b = projection.world_to_screen(end);
        if !a.is_visible() || !b.is_visible() {
            return false;
        }
        point_to_segment_distance_2d(mouse, a.screen, b.screen) < settings.pixel_threshold
    })
}

/// Normierte Bildschirmrichtung einer Welt-Achse am Punkt `origin`.
///
/// `None`, wenn die Achse (nahezu) auf die Blickrichtung fällt oder hinter
/// der Kamera liegt.
pub fn screen_axis_direction(
    projection: &Projection,
    origin: Vec3,
    axis: Axis,
    settings: &GizmoSettings,
) -> Option<Vec2> {
    let (start, end) = axis_segment(origin, axis, settings);
    let a = projection.world_to_screen(start);
    let b = projection.world_to_screen(end);
    if !a.is_visible() || !b.is_visible() {
        return None;
    }
    let dir = b.screen - a.screen;
    if dir.length_squared() <= 1e-6 {
        return None;
    }
    Some(dir.normalize())
}

/// Weltverschiebung entlang der Achse für ein Maus-Delta.
///
/// Projiziert das Delta auf die Bildschirmrichtung der Achse und skaliert
/// mit der festen Empfindlichkeit.
pub fn axis_drag_offset(
    projection: &Projection,
    origin: Vec3,
    axis: Axis,
    mouse_delta: Vec2,
    settings: &GizmoSettings,
) -> Option<Vec3> {
    let screen_dir = screen_axis_direction(projection, origin, axis, settings)?;
    let amount = mouse_delta.dot(screen_dir) * settings.drag_sensitivity;
    Some(axis.unit() * amount)
}

//! Rendering der Szene über eine abstrakte Zeichenfläche.
//!
//! Die Zeichenfläche bekommt Kamera-Extrinsik und Primitive in
//! Weltkoordinaten; wie sie rasterisiert werden, ist ihre Sache.

mod egui_surface;
mod gizmo_renderer;
mod point_renderer;
mod track_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use egui_surface::EguiSurface;
pub use types::{color32, Rgba};

use crate::core::WORLD_UP;
use glam::Vec3;

/// Ziel der Render-Aufrufe.
///
/// Alle Primitive liegen in Weltkoordinaten; die Kamera wird pro Frame
/// einmal über [`set_camera`](Self::set_camera) gesetzt.
pub trait SceneSurface {
    /// Setzt Augpunkt, Blickziel und Hochvektor.
    fn set_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3);

    /// Kugel mit Weltradius.
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Rgba);

    /// Linie mit fester Breite in Pixeln.
    fn draw_line(&mut self, from: Vec3, to: Vec3, width_px: f32, color: Rgba);

    /// Kegel von der Grundfläche zur Spitze.
    fn draw_cone(&mut self, base: Vec3, tip: Vec3, radius: f32, color: Rgba);
}

/// Zeichnet die komplette Szene: Kurven, Hilfslinien, Punkte, Gizmo.
pub fn draw_scene(scene: &RenderScene, surface: &mut impl SceneSurface) {
    let camera = &scene.camera;
    surface.set_camera(camera.position, camera.look_target(), WORLD_UP);

    if !scene.has_track() {
        log::debug!("draw_scene: leere Strecke");
    }

    track_renderer::draw_curves(scene, surface);
    track_renderer::draw_control_lines(scene, surface);
    point_renderer::draw_points(scene, surface);

    if let Some(origin) = scene.gizmo_origin {
        gizmo_renderer::draw_gizmo(scene, origin, surface);
    }
}

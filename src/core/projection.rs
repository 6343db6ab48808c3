//! Perspektivische Welt↔Bildschirm-Abbildung passend zum Renderer.
//!
//! Vertikales Sichtfeld π/3, Bildschirm-Y wächst nach unten (wie die
//! Welt-Y-Achse). [`Projection`] hält die Kamerabasis eines Frames fest, damit
//! Picking und Zeichnen dieselben Vektoren verwenden.

use super::camera::Camera3D;
use super::math::{Ray, WORLD_UP};
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_3;

/// Vertikales Sichtfeld in Radiant.
pub const FOV_Y: f32 = FRAC_PI_3;
/// Kamera-Tiefe, ab der ein Punkt als sichtbar gilt.
pub const NEAR_PLANE: f32 = 0.1;
/// Bildschirm-Koordinate für nicht sichtbare Punkte.
pub const OFFSCREEN: Vec2 = Vec2::new(-9999.0, -9999.0);

/// Ergebnis von [`Projection::world_to_screen`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenProjection {
    /// Pixel-Position (oder [`OFFSCREEN`])
    pub screen: Vec2,
    /// Kamera-Tiefe (Abstand entlang der Blickrichtung)
    pub depth: f32,
}

impl ScreenProjection {
    /// Punkt liegt vor der Near-Plane.
    pub fn is_visible(&self) -> bool {
        self.depth > NEAR_PLANE
    }
}

/// Kamerabasis und Viewport eines Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub eye: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    /// Viewport-Größe in Pixeln
    pub viewport: Vec2,
}

impl Projection {
    /// Basis aus der aktuellen Kamera-Pose.
    pub fn from_camera(camera: &Camera3D, viewport: Vec2) -> Self {
        let forward = camera.forward();
        Self::from_basis(camera.position, forward, viewport)
    }

    /// Basis aus Augpunkt, Blickziel und Hochvektor (wie `lookAt`).
    ///
    /// `world_up` dient nur der Orientierung von `right`; die Bildachse
    /// `up` wird immer neu als `cross(right, forward)` gebildet.
    pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3, viewport: Vec2) -> Self {
        let forward = (target - eye).normalize_or_zero();
        let right = forward.cross(world_up).normalize_or_zero();
        let up = right.cross(forward);
        Self {
            eye,
            forward,
            right,
            up,
            viewport,
        }
    }

    fn from_basis(eye: Vec3, forward: Vec3, viewport: Vec2) -> Self {
        let right = forward.cross(WORLD_UP).normalize_or_zero();
        let up = right.cross(forward);
        Self {
            eye,
            forward,
            right,
            up,
            viewport,
        }
    }

    fn focal(&self) -> f32 {
        1.0 / (FOV_Y / 2.0).tan()
    }

    fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y.max(1.0)
    }

    /// Transformiert einen Weltpunkt in den Kameraraum `(right, up, forward)`.
    pub fn to_camera_space(&self, world: Vec3) -> Vec3 {
        let to_point = world - self.eye;
        Vec3::new(
            to_point.dot(self.right),
            to_point.dot(self.up),
            to_point.dot(self.forward),
        )
    }

    /// Projiziert einen Weltpunkt auf den Bildschirm.
    ///
    /// Punkte mit Tiefe `<= 0.1` liefern [`OFFSCREEN`] mit der echten Tiefe.
    pub fn world_to_screen(&self, world: Vec3) -> ScreenProjection {
        let cam = self.to_camera_space(world);
        if cam.z <= NEAR_PLANE {
            return ScreenProjection {
                screen: OFFSCREEN,
                depth: cam.z,
            };
        }
        let f = self.focal();
        let half = self.viewport * 0.5;
        let x = (cam.x * f / (cam.z * self.aspect())) * half.x + half.x;
        let y = (cam.y * f / cam.z) * half.y + half.y;
        ScreenProjection {
            screen: Vec2::new(x, y),
            depth: cam.z,
        }
    }

    /// Strahl von der Kamera durch einen Bildschirmpunkt.
    pub fn screen_to_ray(&self, screen: Vec2) -> Ray {
        let half = self.viewport * 0.5;
        let ndc_x = (screen.x - half.x) / half.x.max(f32::EPSILON);
        let ndc_y = (screen.y - half.y) / half.y.max(f32::EPSILON);
        let f = self.focal();
        let cam_x = ndc_x * self.aspect() / f;
        let cam_y = ndc_y / f;
        Ray::new(
            self.eye,
            self.right * cam_x + self.up * cam_y + self.forward,
        )
    }

    /// Bildschirmradius einer Weltkugel in Pixeln (0 wenn nicht sichtbar).
    pub fn screen_radius_for_world_size(&self, world: Vec3, world_radius: f32) -> f32 {
        let center = self.world_to_screen(world);
        let edge = self.world_to_screen(world + self.right * world_radius);
        if !center.is_visible() || !edge.is_visible() {
            return 0.0;
        }
        center.screen.distance(edge.screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn front_projection() -> Projection {
        let camera = Camera3D::default();
        Projection::from_camera(&camera, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let p = front_projection().world_to_screen(Vec3::ZERO);
        assert!(p.is_visible());
        assert_relative_eq!(p.screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(p.screen.y, 300.0, epsilon = 1e-3);
        assert_relative_eq!(p.depth, 1000.0, epsilon = 1e-3);
    }

    #[test]
    fn positive_world_y_is_below_center() {
        let p = front_projection().world_to_screen(Vec3::new(0.0, 50.0, 0.0));
        assert!(p.screen.y > 300.0);
    }

    #[test]
    fn point_behind_camera_is_offscreen() {
        let p = front_projection().world_to_screen(Vec3::new(0.0, 0.0, 2000.0));
        assert!(!p.is_visible());
        assert_eq!(p.screen, OFFSCREEN);
        assert!(p.depth < 0.0);
    }

    #[test]
    fn ray_through_projection_recovers_point() {
        let mut camera = Camera3D::default();
        camera.position = Vec3::new(120.0, -80.0, 640.0);
        camera.yaw = 0.3;
        camera.pitch = -0.2;
        let proj = Projection::from_camera(&camera, Vec2::new(1280.0, 720.0));

        for world in [
            Vec3::new(-200.0, 0.0, -300.0),
            Vec3::new(0.0, -100.0, 0.0),
            Vec3::new(200.0, 0.0, 300.0),
            Vec3::new(40.0, 25.0, -10.0),
        ] {
            let projected = proj.world_to_screen(world);
            assert!(projected.is_visible());
            let ray = proj.screen_to_ray(projected.screen);
            // Tiefenebene des Originalpunkts
            let plane_point = proj.eye + proj.forward * projected.depth;
            let hit = ray
                .intersect_plane(plane_point, proj.forward)
                .expect("Ebene vor der Kamera");
            assert_relative_eq!(hit.x, world.x, epsilon = 0.05);
            assert_relative_eq!(hit.y, world.y, epsilon = 0.05);
            assert_relative_eq!(hit.z, world.z, epsilon = 0.05);
        }
    }

    #[test]
    fn center_ray_points_forward() {
        let proj = front_projection();
        let ray = proj.screen_to_ray(Vec2::new(400.0, 300.0));
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-6);
        assert_eq!(ray.origin, Camera3D::DEFAULT_POSITION);
    }

    #[test]
    fn screen_radius_shrinks_with_distance() {
        let proj = front_projection();
        let near = proj.screen_radius_for_world_size(Vec3::new(0.0, 0.0, 500.0), 15.0);
        let far = proj.screen_radius_for_world_size(Vec3::ZERO, 15.0);
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn screen_radius_behind_camera_is_zero() {
        let proj = front_projection();
        assert_eq!(
            proj.screen_radius_for_world_size(Vec3::new(0.0, 0.0, 1500.0), 15.0),
            0.0
        );
    }

    #[test]
    fn look_at_matches_camera_basis() {
        let camera = Camera3D::default();
        let viewport = Vec2::new(800.0, 600.0);
        let a = Projection::from_camera(&camera, viewport);
        let b = Projection::look_at(camera.position, camera.look_target(), WORLD_UP, viewport);
        assert_relative_eq!(a.right.x, b.right.x, epsilon = 1e-6);
        assert_relative_eq!(a.up.y, b.up.y, epsilon = 1e-6);
        assert_relative_eq!(a.forward.z, b.forward.z, epsilon = 1e-6);
    }
}

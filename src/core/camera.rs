//! Frei fliegende 3D-Kamera mit Trägheit und Viewpoint-Snap.
//!
//! Die Welt ist Y-unten orientiert: kleinere Y-Werte liegen auf dem
//! Bildschirm weiter oben. Alle Verbraucher (Projektion, Picking, Bewegung)
//! verwenden dieselbe Basis aus [`Camera3D::forward`] und [`Camera3D::right`].

use super::math::{wrap_angle, WORLD_UP};
use super::viewpoint::Viewpoint;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Einstellbare Kamera-Parameter (Teil der `EditorOptions`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Radiant pro Pixel Mausbewegung beim Umsehen
    pub look_sensitivity: f32,
    /// Dämpfung der Winkelgeschwindigkeit pro Tick (0..1)
    pub angular_friction: f32,
    /// Winkelgeschwindigkeit, unterhalb derer die Drehung stoppt
    pub angular_rest_epsilon: f32,
    /// Abstand der Pitch-Grenze zu ±π/2
    pub pitch_margin: f32,
    /// Beschleunigung pro Tick bei gehaltener Bewegungstaste
    pub acceleration: f32,
    /// Maximale Geschwindigkeit (Welteinheiten pro Tick)
    pub move_speed: f32,
    /// Dämpfung der linearen Geschwindigkeit ohne Eingabe (0..1)
    pub linear_friction: f32,
    /// Geschwindigkeit, unterhalb derer die Kamera stehen bleibt
    pub linear_rest_epsilon: f32,
    /// Interpolationsfaktor pro Tick während eines Snaps
    pub snap_lerp: f32,
    /// Restabstand, ab dem ein Snap als abgeschlossen gilt
    pub snap_finish_distance: f32,
    /// Welteinheiten pro Mausrad-Einheit (Dolly)
    pub zoom_scale: f32,
    /// Welteinheiten pro Pixel beim Pannen
    pub pan_speed: f32,
}

impl CameraTuning {
    /// Gültige Fluggeschwindigkeit: endlich und positiv.
    pub fn is_valid_move_speed(speed: f32) -> bool {
        speed.is_finite() && speed > 0.0
    }

    /// Übernimmt eine neue Fluggeschwindigkeit.
    ///
    /// Ungültige Werte werden verworfen, die bisherige bleibt erhalten.
    pub fn set_move_speed(&mut self, speed: f32) -> bool {
        if !Self::is_valid_move_speed(speed) {
            log::warn!(
                "Ungültige Fluggeschwindigkeit {} verworfen, bleibe bei {}",
                speed,
                self.move_speed
            );
            return false;
        }
        self.move_speed = speed;
        true
    }
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            look_sensitivity: 0.003,
            angular_friction: 0.8,
            angular_rest_epsilon: 1e-5,
            pitch_margin: 0.01,
            acceleration: 1.5,
            move_speed: 12.0,
            linear_friction: 0.85,
            linear_rest_epsilon: 0.01,
            snap_lerp: 0.25,
            snap_finish_distance: 1.0,
            zoom_scale: 0.5,
            pan_speed: 1.0,
        }
    }
}

/// Gehaltene Bewegungstasten eines Frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementInput {
    /// Gibt `true` zurück, wenn mindestens eine Richtung aktiv ist.
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Ziel-Pose eines laufenden Snap-Übergangs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// 3D-Kamera mit Yaw/Pitch, linearer und Winkel-Trägheit.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Position in Welt-Koordinaten
    pub position: Vec3,
    /// Drehung um die Y-Achse (Radiant)
    pub yaw: f32,
    /// Neigung (Radiant), begrenzt auf ±(π/2 - margin)
    pub pitch: f32,
    /// Lineare Geschwindigkeit (Welteinheiten pro Tick)
    pub velocity: Vec3,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
    pub tuning: CameraTuning,
    snap: Option<SnapTarget>,
}

impl Camera3D {
    /// Standard-Position: vor dem Ursprung auf der +Z-Achse.
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 1000.0);

    /// Erstellt eine Kamera in der Standard-Pose.
    pub fn new(tuning: CameraTuning) -> Self {
        Self {
            position: Self::DEFAULT_POSITION,
            yaw: 0.0,
            pitch: 0.0,
            velocity: Vec3::ZERO,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            tuning,
            snap: None,
        }
    }

    /// Setzt Pose und Geschwindigkeiten zurück, behält das Tuning.
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning);
    }

    /// Blickrichtung aus Yaw und Pitch.
    ///
    /// `(0,0,-1)` erst um X (Pitch), dann um Y (Yaw) gedreht.
    pub fn forward(&self) -> Vec3 {
        forward_from_angles(self.yaw, self.pitch)
    }

    /// Rechts-Vektor: `normalize(cross(forward, Y))`.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(WORLD_UP).normalize_or_zero()
    }

    /// Hoch-Vektor der Kamerabasis: `cross(right, forward)`.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Blickziel einen Einheitsschritt vor der Kamera (für den Renderer).
    pub fn look_target(&self) -> Vec3 {
        self.position + self.forward()
    }

    /// Ein Snap-Übergang läuft gerade.
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    /// Kamera bewegt oder dreht sich noch (oder snappt).
    pub fn is_moving(&self) -> bool {
        self.snap.is_some()
            || self.velocity != Vec3::ZERO
            || self.yaw_velocity != 0.0
            || self.pitch_velocity != 0.0
    }

    /// Sammelt Winkelgeschwindigkeit aus einem Maus-Delta.
    ///
    /// Yaw/Pitch ändern sich erst im nächsten [`tick`](Self::tick).
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity -= dx * self.tuning.look_sensitivity;
        self.pitch_velocity -= dy * self.tuning.look_sensitivity;
    }

    /// Ein Simulationsschritt mit festem Zeitschritt.
    pub fn tick(&mut self, movement: MovementInput) {
        self.integrate_angles();
        self.clamp_pitch();

        if movement.any() {
            self.cancel_snap();
        }
        self.advance_snap();

        self.integrate_movement(movement);
    }

    /// Dolly entlang der Blickrichtung.
    pub fn zoom(&mut self, delta: f32) {
        self.position += self.forward() * delta * self.tuning.zoom_scale;
        self.cancel_snap();
    }

    /// Verschiebt die Kamera in ihrer Bildebene (Pixel-Delta).
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let speed = self.tuning.pan_speed;
        self.position -= (self.right() * dx + self.up() * dy) * speed;
        self.cancel_snap();
    }

    /// Startet einen interpolierten Übergang zu einem Viewpoint.
    pub fn snap_to(&mut self, viewpoint: &Viewpoint) {
        let dir = (viewpoint.target - viewpoint.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            log::debug!("Viewpoint '{}' ohne Blickrichtung ignoriert", viewpoint.name);
            return;
        }
        let limit = self.pitch_limit();
        self.snap = Some(SnapTarget {
            position: viewpoint.position,
            yaw: dir.x.atan2(-dir.z),
            pitch: dir.y.clamp(-1.0, 1.0).asin().clamp(-limit, limit),
        });
        self.velocity = Vec3::ZERO;
        self.yaw_velocity = 0.0;
        self.pitch_velocity = 0.0;
    }

    /// Bricht einen laufenden Snap ab.
    pub fn cancel_snap(&mut self) {
        self.snap = None;
    }

    fn pitch_limit(&self) -> f32 {
        FRAC_PI_2 - self.tuning.pitch_margin
    }

    fn integrate_angles(&mut self) {
        let t = &self.tuning;
        self.yaw += self.yaw_velocity;
        self.pitch += self.pitch_velocity;
        self.yaw_velocity *= t.angular_friction;
        self.pitch_velocity *= t.angular_friction;
        if self.yaw_velocity.abs() < t.angular_rest_epsilon {
            self.yaw_velocity = 0.0;
        }
        if self.pitch_velocity.abs() < t.angular_rest_epsilon {
            self.pitch_velocity = 0.0;
        }
    }

    fn clamp_pitch(&mut self) {
        let limit = self.pitch_limit();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    fn advance_snap(&mut self) {
        let Some(target) = self.snap else {
            return;
        };
        let k = self.tuning.snap_lerp;
        self.position = self.position.lerp(target.position, k);
        // kürzester Weg um den Kreis
        self.yaw += wrap_angle(target.yaw - self.yaw) * k;
        self.pitch += (target.pitch - self.pitch) * k;

        if self.position.distance(target.position) < self.tuning.snap_finish_distance {
            self.position = target.position;
            self.yaw = target.yaw;
            self.pitch = target.pitch;
            self.snap = None;
        }
    }

    fn integrate_movement(&mut self, movement: MovementInput) {
        let t = self.tuning;
        let flat_forward = Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos());
        let right = flat_forward.cross(WORLD_UP).normalize_or_zero();

        let mut wish = Vec3::ZERO;
        if movement.forward {
            wish += flat_forward;
        }
        if movement.back {
            wish -= flat_forward;
        }
        if movement.right {
            wish += right;
        }
        if movement.left {
            wish -= right;
        }
        // Y zeigt nach unten
        if movement.up {
            wish -= WORLD_UP;
        }
        if movement.down {
            wish += WORLD_UP;
        }

        if wish != Vec3::ZERO {
            self.velocity += wish.normalize() * t.acceleration;
        } else {
            self.velocity *= t.linear_friction;
        }

        self.velocity = self.velocity.clamp_length_max(t.move_speed);
        if self.velocity.length() < t.linear_rest_epsilon {
            self.velocity = Vec3::ZERO;
        }
        self.position += self.velocity;
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(CameraTuning::default())
    }
}

/// Blickrichtung für beliebige Yaw/Pitch-Paare.
pub fn forward_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
    .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewpoint::Viewpoint;
    use approx::assert_relative_eq;

    #[test]
    fn forward_at_rest_looks_down_negative_z() {
        let camera = Camera3D::default();
        let f = camera.forward();
        assert_relative_eq!(f.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(f.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(f.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn basis_is_orthonormal_over_angle_grid() {
        let mut camera = Camera3D::default();
        let limit = FRAC_PI_2 - camera.tuning.pitch_margin;
        for yi in -8..=8 {
            for pi in -4..=4 {
                camera.yaw = yi as f32 * 0.4;
                camera.pitch = pi as f32 / 4.0 * limit;
                let f = camera.forward();
                let r = camera.right();
                assert_relative_eq!(f.length(), 1.0, epsilon = 1e-5);
                assert_relative_eq!(r.length(), 1.0, epsilon = 1e-5);
                assert_relative_eq!(r.dot(f), 0.0, epsilon = 1e-5);
                assert_relative_eq!(camera.up().dot(f), 0.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn look_is_deferred_until_tick() {
        let mut camera = Camera3D::default();
        camera.apply_look(100.0, 0.0);
        assert_relative_eq!(camera.yaw, 0.0);

        camera.tick(MovementInput::default());
        assert!(camera.yaw < 0.0);
    }

    #[test]
    fn angular_velocity_decays_to_exact_rest() {
        let mut camera = Camera3D::default();
        camera.apply_look(50.0, 30.0);
        for _ in 0..200 {
            camera.tick(MovementInput::default());
        }
        assert_eq!(camera.yaw_velocity, 0.0);
        assert_eq!(camera.pitch_velocity, 0.0);
        assert!(!camera.is_moving());
    }

    #[test]
    fn pitch_is_clamped_below_vertical() {
        let mut camera = Camera3D::default();
        camera.apply_look(0.0, -100_000.0);
        camera.tick(MovementInput::default());
        assert!(camera.pitch < FRAC_PI_2);
        assert_relative_eq!(camera.pitch, FRAC_PI_2 - camera.tuning.pitch_margin);
    }

    #[test]
    fn forward_key_moves_along_horizontal_forward() {
        let mut camera = Camera3D::default();
        let start = camera.position;
        let movement = MovementInput {
            forward: true,
            ..Default::default()
        };
        camera.tick(movement);
        assert!(camera.position.z < start.z);
        assert_relative_eq!(camera.position.y, start.y);
    }

    #[test]
    fn velocity_is_clamped_to_move_speed() {
        let mut camera = Camera3D::default();
        let movement = MovementInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..100 {
            camera.tick(movement);
        }
        assert_relative_eq!(
            camera.velocity.length(),
            camera.tuning.move_speed,
            epsilon = 1e-4
        );
    }

    #[test]
    fn up_key_moves_towards_negative_y() {
        let mut camera = Camera3D::default();
        camera.tick(MovementInput {
            up: true,
            ..Default::default()
        });
        assert!(camera.position.y < 0.0);
    }

    #[test]
    fn movement_stops_after_release() {
        let mut camera = Camera3D::default();
        let movement = MovementInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            camera.tick(movement);
        }
        for _ in 0..200 {
            camera.tick(MovementInput::default());
        }
        assert_eq!(camera.velocity, Vec3::ZERO);
    }

    #[test]
    fn snap_to_front_converges() {
        let mut camera = Camera3D::default();
        camera.position = Vec3::new(300.0, -200.0, 100.0);
        camera.yaw = 2.0;
        camera.pitch = 0.5;

        let front = Viewpoint::new("Front", Vec3::new(0.0, 0.0, 1000.0), Vec3::ZERO);
        camera.snap_to(&front);
        assert!(camera.is_snapping());

        for _ in 0..60 {
            camera.tick(MovementInput::default());
        }

        assert!(!camera.is_snapping());
        assert_relative_eq!(camera.position.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(camera.position.z, 1000.0, epsilon = 1e-3);
        let f = camera.forward();
        assert_relative_eq!(f.z, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn snap_takes_shortest_yaw_path() {
        let mut camera = Camera3D::default();
        camera.position = Vec3::new(0.0, 0.0, 500.0);
        camera.yaw = 3.0;
        // Ziel-Yaw ≈ -π + 0.1; kürzester Weg führt über +π
        let vp = Viewpoint::new(
            "Back",
            Vec3::ZERO,
            Vec3::new((-std::f32::consts::PI + 0.1).sin(), 0.0, 1.0),
        );
        camera.snap_to(&vp);
        camera.tick(MovementInput::default());
        assert!(camera.yaw > 3.0);
    }

    #[test]
    fn movement_cancels_snap() {
        let mut camera = Camera3D::default();
        let top = Viewpoint::new("Top", Vec3::new(0.0, -800.0, 0.0), Vec3::ZERO);
        camera.snap_to(&top);
        camera.tick(MovementInput {
            back: true,
            ..Default::default()
        });
        assert!(!camera.is_snapping());
    }

    #[test]
    fn zoom_and_pan_cancel_snap() {
        let mut camera = Camera3D::default();
        let side = Viewpoint::new("Side", Vec3::new(1000.0, 0.0, 0.0), Vec3::ZERO);

        camera.snap_to(&side);
        camera.zoom(10.0);
        assert!(!camera.is_snapping());

        camera.snap_to(&side);
        camera.pan(3.0, 0.0);
        assert!(!camera.is_snapping());
    }

    #[test]
    fn zoom_dollies_along_forward() {
        let mut camera = Camera3D::default();
        camera.zoom(100.0);
        assert_relative_eq!(camera.position.z, 1000.0 - 100.0 * camera.tuning.zoom_scale);
    }

    #[test]
    fn pan_right_moves_camera_left() {
        let mut camera = Camera3D::default();
        camera.pan(10.0, 0.0);
        assert!(camera.position.x < 0.0);
    }

    #[test]
    fn invalid_move_speed_keeps_previous_value() {
        let mut tuning = CameraTuning::default();

        assert!(tuning.set_move_speed(7.5));
        assert!(!tuning.set_move_speed(-5.0));
        assert!(!tuning.set_move_speed(0.0));
        assert!(!tuning.set_move_speed(f32::NAN));

        assert_eq!(tuning.move_speed, 7.5);
    }
}

//! Geometrie-Hilfsfunktionen: Punkt-Segment- und Strahl-Segment-Abstände.
//!
//! Vektor-Grundoperationen (add, sub, cross, dot, normalize, lerp) kommen
//! direkt aus `glam`; hier liegen nur die Routinen, die glam nicht anbietet.

use glam::{Vec2, Vec3};

/// Relative Toleranz, unterhalb derer zwei Richtungen als parallel gelten.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Welt-Hochachse (Y).
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Halbstrahl mit Ursprung und normierter Richtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt (Kameraposition beim Maus-Strahl)
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl; die Richtung wird normiert.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Punkt auf dem Strahl beim Parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Schnitt mit der Ebene durch `plane_point` mit Normale `plane_normal`.
    ///
    /// `None` bei (nahezu) paralleler Ebene oder wenn der Schnittpunkt
    /// hinter dem Ursprung liegt (`t <= 0`).
    pub fn intersect_plane(&self, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
        let denom = self.direction.dot(plane_normal);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }
        let t = (plane_point - self.origin).dot(plane_normal) / denom;
        if t <= 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}

/// Abstand eines 2D-Punkts zum Segment `a`–`b` (geklemmte Projektion).
pub fn point_to_segment_distance_2d(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Kürzester Abstand zwischen einem Strahl und dem Segment `seg_start`–`seg_end`.
///
/// Löst das 2×2-System der nächsten Punkte zweier Geraden. Der
/// Segment-Parameter wird auf [0, 1] geklemmt, der Strahl-Parameter nicht.
/// Bei (nahezu) parallelen Richtungen wird `f32::INFINITY` geliefert.
pub fn ray_to_segment_distance_3d(
    ray_origin: Vec3,
    ray_dir: Vec3,
    seg_start: Vec3,
    seg_end: Vec3,
) -> f32 {
    let u = ray_dir;
    let v = seg_end - seg_start;
    let w = ray_origin - seg_start;

    let a = u.dot(u);
    let b = u.dot(v);
    let c = v.dot(v);
    let d = u.dot(w);
    let e = v.dot(w);

    let denom = a * c - b * b;
    if a <= f32::EPSILON || denom <= PARALLEL_EPSILON * a * c {
        return f32::INFINITY;
    }

    let t = ((a * e - b * d) / denom).clamp(0.0, 1.0);
    // Strahl-Parameter passend zum geklemmten t neu bestimmen
    let s = (b * t - d) / a;

    let on_ray = ray_origin + u * s;
    let on_segment = seg_start + v * t;
    on_ray.distance(on_segment)
}

/// Mittelpunkt zweier Punkte.
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    a.lerp(b, 0.5)
}

/// Normiert einen Winkel auf (-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

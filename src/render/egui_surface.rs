//! Zeichenfläche auf Basis des egui-Painters.
//!
//! Primitive werden mit derselben Projektion wie das Picking auf den
//! Bildschirm gebracht und von hinten nach vorne gezeichnet.

use super::types::color32;
use super::{Rgba, SceneSurface};
use crate::core::{Projection, NEAR_PLANE, WORLD_UP};
use egui::{Painter, Pos2, Rect, Shape, Stroke};
use glam::{Vec2, Vec3};

enum Shape2D {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Segment {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Triangle {
        points: [Vec2; 3],
        color: Rgba,
    },
}

struct Primitive {
    depth: f32,
    shape: Shape2D,
}

/// Sammelt Primitive eines Frames für den egui-Painter.
pub struct EguiSurface {
    rect: Rect,
    projection: Projection,
    primitives: Vec<Primitive>,
}

impl EguiSurface {
    /// Neue Fläche für den Viewport-Bereich `rect`.
    pub fn new(rect: Rect) -> Self {
        let viewport = Vec2::new(rect.width(), rect.height());
        Self {
            rect,
            projection: Projection::look_at(Vec3::Z, Vec3::ZERO, WORLD_UP, viewport),
            primitives: Vec::new(),
        }
    }

    /// Anzahl gesammelter (sichtbarer) Primitive.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    fn to_pos(&self, screen: Vec2) -> Pos2 {
        self.rect.min + egui::vec2(screen.x, screen.y)
    }

    fn depth_of(&self, world: Vec3) -> f32 {
        self.projection.to_camera_space(world).z
    }

    /// Kürzt eine Strecke auf den Teil vor der Near-Plane.
    fn clip_to_near(&self, from: Vec3, to: Vec3) -> Option<(Vec3, Vec3)> {
        let d0 = self.depth_of(from);
        let d1 = self.depth_of(to);
        let near = NEAR_PLANE * 2.0;
        match (d0 > near, d1 > near) {
            (true, true) => Some((from, to)),
            (false, false) => None,
            (front_first, _) => {
                let t = (near - d0) / (d1 - d0);
                let cut = from.lerp(to, t);
                if front_first {
                    Some((from, cut))
                } else {
                    Some((cut, to))
                }
            }
        }
    }

    /// Zeichnet alle Primitive, entfernte zuerst.
    pub fn paint(mut self, painter: &Painter) {
        self.primitives.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let shapes: Vec<Shape> = self
            .primitives
            .iter()
            .map(|primitive| match primitive.shape {
                Shape2D::Circle {
                    center,
                    radius,
                    color,
                } => Shape::circle_filled(self.to_pos(center), radius, color32(color)),
                Shape2D::Segment {
                    from,
                    to,
                    width,
                    color,
                } => Shape::line_segment(
                    [self.to_pos(from), self.to_pos(to)],
                    Stroke::new(width, color32(color)),
                ),
                Shape2D::Triangle { points, color } => Shape::convex_polygon(
                    points.iter().map(|&p| self.to_pos(p)).collect(),
                    color32(color),
                    Stroke::NONE,
                ),
            })
            .collect();

        painter.with_clip_rect(self.rect).extend(shapes);
    }
}

impl SceneSurface for EguiSurface {
    fn set_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        let viewport = Vec2::new(self.rect.width(), self.rect.height());
        self.projection = Projection::look_at(eye, target, up, viewport);
    }

    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Rgba) {
        let projected = self.projection.world_to_screen(center);
        if !projected.is_visible() {
            return;
        }
        let radius_px = self
            .projection
            .screen_radius_for_world_size(center, radius)
            .max(1.0);
        self.primitives.push(Primitive {
            depth: projected.depth,
            shape: Shape2D::Circle {
                center: projected.screen,
                radius: radius_px,
                color,
            },
        });
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, width_px: f32, color: Rgba) {
        let Some((from, to)) = self.clip_to_near(from, to) else {
            return;
        };
        let a = self.projection.world_to_screen(from);
        let b = self.projection.world_to_screen(to);
        if !a.is_visible() || !b.is_visible() {
            return;
        }
        self.primitives.push(Primitive {
            depth: (a.depth + b.depth) * 0.5,
            shape: Shape2D::Segment {
                from: a.screen,
                to: b.screen,
                width: width_px,
                color,
            },
        });
    }

    fn draw_cone(&mut self, base: Vec3, tip: Vec3, radius: f32, color: Rgba) {
        let b = self.projection.world_to_screen(base);
        let t = self.projection.world_to_screen(tip);
        if !b.is_visible() || !t.is_visible() {
            return;
        }
        let dir = t.screen - b.screen;
        let half_width = self
            .projection
            .screen_radius_for_world_size(base, radius)
            .max(2.0);
        // Kegel zeigt auf die Kamera: nur die Grundfläche ist sichtbar
        if dir.length_squared() <= 1e-6 {
            self.primitives.push(Primitive {
                depth: b.depth,
                shape: Shape2D::Circle {
                    center: b.screen,
                    radius: half_width,
                    color,
                },
            });
            return;
        }
        let perp = dir.normalize().perp() * half_width;
        self.primitives.push(Primitive {
            depth: (b.depth + t.depth) * 0.5,
            shape: Shape2D::Triangle {
                points: [t.screen, b.screen + perp, b.screen - perp],
                color,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::core::PointRef;
    use crate::render::draw_scene;
    use egui::pos2;

    fn viewport_rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    fn surface() -> EguiSurface {
        let mut surface = EguiSurface::new(viewport_rect());
        surface.set_camera(Vec3::new(0.0, 0.0, 1000.0), Vec3::ZERO, WORLD_UP);
        surface
    }

    #[test]
    fn spheres_behind_camera_are_culled() {
        let mut s = surface();
        s.draw_sphere(Vec3::ZERO, 10.0, [1.0; 4]);
        s.draw_sphere(Vec3::new(0.0, 0.0, 2000.0), 10.0, [1.0; 4]);
        assert_eq!(s.primitive_count(), 1);
    }

    #[test]
    fn line_crossing_near_plane_is_clipped() {
        let s = surface();
        let (from, to) = s
            .clip_to_near(Vec3::ZERO, Vec3::new(0.0, 0.0, 2000.0))
            .expect("vorderer Teil bleibt");
        assert_eq!(from, Vec3::ZERO);
        assert!(s.depth_of(to) > NEAR_PLANE);
        assert!(s
            .clip_to_near(Vec3::new(0.0, 0.0, 1500.0), Vec3::new(0.0, 0.0, 2000.0))
            .is_none());
    }

    #[test]
    fn full_scene_produces_primitives() {
        let mut state = AppState::new();
        state.selection.selected = Some(PointRef::vertex(1));
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let mut s = EguiSurface::new(viewport_rect());

        draw_scene(&scene, &mut s);

        // Kurven, Hilfslinien, 5 Punkte, Gizmo
        assert!(s.primitive_count() > 5 + 3);
    }

    #[test]
    fn paint_in_headless_context_does_not_panic() {
        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut s = surface();
                s.draw_sphere(Vec3::ZERO, 10.0, [1.0; 4]);
                s.draw_line(Vec3::ZERO, Vec3::X * 100.0, 2.0, [1.0; 4]);
                s.draw_cone(Vec3::ZERO, Vec3::Y * 50.0, 5.0, [1.0; 4]);
                s.paint(ui.painter());
            });
        });
    }
}

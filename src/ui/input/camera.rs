//! Kamera-Gesten: Mittel-Drag (Pan) und Mausrad (Dolly).

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Mittlere Maustaste verschiebt die Kamera in der Bildebene.
    pub(crate) fn handle_middle_pan(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.dragged_by(egui::PointerButton::Middle) {
            return;
        }
        let delta = ctx.response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::CameraPan {
                delta: Vec2::new(delta.x, delta.y),
            });
        }
    }

    /// Mausrad fährt entlang der Blickrichtung.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }
        events.push(AppIntent::CameraZoom { delta: scroll });
    }
}

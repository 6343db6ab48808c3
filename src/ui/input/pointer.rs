//! Primäre Maustaste und Hover im Viewport.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Drücken im Viewport startet eine Geste; sie endet beim Loslassen,
    /// auch wenn der Zeiger das Viewport verlassen hat.
    pub(crate) fn handle_primary_pointer(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let (pressed, released, latest) = ctx.ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        if pressed && self.primary_pos.is_none() {
            if let Some(pos) = ctx
                .ui
                .input(|i| i.pointer.press_origin())
                .filter(|&p| ctx.contains(p))
            {
                let local = ctx.to_local(pos);
                self.primary_pos = Some(local);
                events.push(AppIntent::PointerPressed { pos: local });
            }
        }

        let Some(last) = self.primary_pos else {
            return;
        };

        if let Some(pos) = latest.map(|p| ctx.to_local(p)) {
            if pos != last {
                self.primary_pos = Some(pos);
                events.push(AppIntent::PointerDragged { pos });
            }
        }

        if released {
            let pos = self.primary_pos.unwrap_or(last);
            self.primary_pos = None;
            events.push(AppIntent::PointerReleased { pos });
        }
    }

    /// Hover-Position, solange die primäre Taste nicht gedrückt ist.
    pub(crate) fn handle_hover(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if self.primary_pos.is_some() {
            return;
        }
        let pos = ctx
            .ui
            .input(|i| i.pointer.hover_pos())
            .filter(|&p| ctx.contains(p))
            .map(|p| ctx.to_local(p));
        events.push(AppIntent::PointerHovered { pos });
    }
}

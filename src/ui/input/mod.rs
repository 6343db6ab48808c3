//! Viewport-Input-Handling: Maus-Events, Scroll, Tastatur → AppIntent.
//!
//! - `pointer`: primäre Maustaste (Drücken, Ziehen, Loslassen) und Hover
//! - `camera`: Mittel-Drag (Pan) und Mausrad (Dolly)

mod camera;
mod pointer;

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
}

impl ViewportContext<'_> {
    /// Bildschirmposition relativ zur linken oberen Viewport-Ecke.
    fn to_local(&self, pos: egui::Pos2) -> Vec2 {
        let local = pos - self.response.rect.min;
        Vec2::new(local.x, local.y)
    }

    fn contains(&self, pos: egui::Pos2) -> bool {
        self.response.rect.contains(pos)
    }
}

/// Verwaltet den Input-Zustand für das Viewport (gedrückte primäre Taste).
#[derive(Default)]
pub struct InputState {
    /// Letzte Position der gedrückten primären Taste (lokal)
    pub(crate) primary_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { primary_pos: None }
    }

    /// Primäre Taste ist im Viewport gedrückt.
    pub fn is_primary_down(&self) -> bool {
        self.primary_pos.is_some()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        has_selection: bool,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext { ui, response };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui, has_selection, options));

        self.handle_primary_pointer(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);
        self.handle_middle_pan(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(
        ctx: &egui::Context,
        input: &mut InputState,
        raw_events: Vec<egui::Event>,
    ) -> Vec<AppIntent> {
        let mut raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        };
        raw_input.events = raw_events;

        let options = EditorOptions::default();
        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let (rect, response) = ui
                        .allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                    events = input.collect_viewport_events(
                        ui,
                        &response,
                        [rect.width(), rect.height()],
                        false,
                        &options,
                    );
                });
        });
        events
    }

    fn button(pos: egui::Pos2, button: egui::PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn primary_press_drag_release_produce_pointer_intents() {
        let ctx = egui::Context::default();
        let mut input = InputState::new();
        let start = egui::pos2(100.0, 100.0);
        let moved = egui::pos2(130.0, 100.0);

        let events = run_frame(
            &ctx,
            &mut input,
            vec![
                egui::Event::PointerMoved(start),
                button(start, egui::PointerButton::Primary, true),
            ],
        );
        assert!(events.contains(&AppIntent::PointerPressed {
            pos: Vec2::new(100.0, 100.0)
        }));
        assert!(input.is_primary_down());

        let events = run_frame(&ctx, &mut input, vec![egui::Event::PointerMoved(moved)]);
        assert!(events.contains(&AppIntent::PointerDragged {
            pos: Vec2::new(130.0, 100.0)
        }));

        let events = run_frame(
            &ctx,
            &mut input,
            vec![button(moved, egui::PointerButton::Primary, false)],
        );
        assert!(events.contains(&AppIntent::PointerReleased {
            pos: Vec2::new(130.0, 100.0)
        }));
        assert!(!input.is_primary_down());
    }

    #[test]
    fn hover_is_reported_without_pressed_button() {
        let ctx = egui::Context::default();
        let mut input = InputState::new();

        let events = run_frame(
            &ctx,
            &mut input,
            vec![egui::Event::PointerMoved(egui::pos2(50.0, 60.0))],
        );

        assert!(events.contains(&AppIntent::PointerHovered {
            pos: Some(Vec2::new(50.0, 60.0))
        }));
    }

    #[test]
    fn every_frame_reports_viewport_size() {
        let ctx = egui::Context::default();
        let mut input = InputState::new();

        let events = run_frame(&ctx, &mut input, Vec::new());

        assert!(matches!(
            events.first(),
            Some(AppIntent::ViewportResized { .. })
        ));
    }
}

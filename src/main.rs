//! Coaster Track Editor.
//!
//! Interaktiver 3D-Editor für Achterbahn-Strecken aus Bezier-Segmenten,
//! mit egui + glow.

use coaster_track_editor::app::use_cases::{persistence, selection};
use coaster_track_editor::render::{draw_scene, EguiSurface};
use coaster_track_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Coaster Track Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Coaster Track Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Coaster Track Editor",
            options,
            Box::new(|cc| Ok(Box::new(EditorApp::new(cc)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Bildschirmbereich des 3D-Viewports im aktuellen Frame
    viewport_rect: egui::Rect,
}

impl EditorApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        match cc.storage {
            Some(storage) => persistence::restore_session(&mut state, storage),
            None => log::warn!("Kein Sitzungsspeicher verfügbar, Start-Strecke aktiv"),
        }

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            viewport_rect: egui::Rect::NOTHING,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);

        // Kamera-Schritt nach allen Eingaben
        let movement = ui::movement_input(ctx);
        events.push(AppIntent::FrameTick { movement });

        self.process_events(events);

        self.render_viewport(ctx);

        self.maybe_request_repaint(ctx, movement.any());
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        persistence::persist_session(&self.state, storage);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &mut self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                self.viewport_rect = rect;

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    self.state.selection.selected.is_some(),
                    &self.state.options,
                ));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }

    /// Zeichnet die Szene mit dem Zustand nach Eingaben und Kamera-Schritt.
    fn render_viewport(&mut self, ctx: &egui::Context) {
        let rect = self.viewport_rect;
        if !rect.is_positive() {
            return;
        }
        let viewport_size = [rect.width(), rect.height()];

        selection::sync_point_flags(&mut self.state);

        let scene: render::RenderScene = self
            .controller
            .build_render_scene(&self.state, viewport_size);

        let background = render::color32(scene.options.background_color);
        let painter = ctx.layer_painter(egui::LayerId::background()).with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, background);

        let mut surface = EguiSurface::new(rect);
        draw_scene(&scene, &mut surface);
        surface.paint(&painter);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, movement_held: bool) {
        if movement_held
            || self.state.view.camera.is_moving()
            || self.input.is_primary_down()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}

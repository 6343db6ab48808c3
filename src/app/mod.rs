//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Strecke, Kamera, Selektion, Maus-Geste und UI-Flags.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, InteractionState, SelectionState, UiState, ViewState};

//! UI-Layer mit egui: Menü, HUD-Panel, Status-Bar, Viewport-Input, Dialoge.
//!
//! Alle Komponenten erzeugen ausschließlich `AppIntent`s.

pub mod dialogs;
pub mod input;
pub mod keyboard;
pub mod menu;
pub mod properties;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use keyboard::movement_input;
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;

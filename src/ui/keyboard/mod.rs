//! Keyboard-Shortcuts und gehaltene Bewegungstasten.
//!
//! Verarbeitet Tastendrücke und mappt sie auf `AppIntent`s. Gehaltene
//! Flugtasten werden separat als `MovementInput` gelesen.

use crate::app::AppIntent;
use crate::core::{MovementInput, VIEWPOINTS};
use crate::shared::EditorOptions;
use glam::Vec3;

const VIEWPOINT_KEYS: [egui::Key; 4] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
];

/// Liest die gehaltenen Flugtasten.
///
/// W/S vor/zurück, A/D seitlich, E/Space hoch, Q/Ctrl runter.
pub fn movement_input(ctx: &egui::Context) -> MovementInput {
    if ctx.wants_keyboard_input() {
        return MovementInput::default();
    }
    ctx.input(|i| MovementInput {
        forward: i.key_down(egui::Key::W),
        back: i.key_down(egui::Key::S),
        left: i.key_down(egui::Key::A),
        right: i.key_down(egui::Key::D),
        up: i.key_down(egui::Key::E) || i.key_down(egui::Key::Space),
        down: i.key_down(egui::Key::Q) || (i.modifiers.ctrl && !ctrl_combo_key_down(i)),
    })
}

/// Ctrl gehört zu einem Kürzel (Z-Nudge, Undo, Redo) statt zur Abwärtsbewegung.
fn ctrl_combo_key_down(i: &egui::InputState) -> bool {
    i.key_down(egui::Key::ArrowUp)
        || i.key_down(egui::Key::ArrowDown)
        || i.key_down(egui::Key::ArrowLeft)
        || i.key_down(egui::Key::ArrowRight)
        || i.key_down(egui::Key::Z)
        || i.key_down(egui::Key::Y)
}

/// Nudge-Delta der Pfeiltasten.
///
/// Links/Rechts = ∓X, Hoch = −Y (Ctrl: +Z), Runter = +Y (Ctrl: −Z).
fn nudge_delta(i: &egui::InputState, step: f32) -> Option<Vec3> {
    let ctrl = i.modifiers.ctrl || i.modifiers.mac_cmd;
    let mut delta = Vec3::ZERO;
    if i.key_pressed(egui::Key::ArrowLeft) {
        delta.x -= step;
    }
    if i.key_pressed(egui::Key::ArrowRight) {
        delta.x += step;
    }
    if i.key_pressed(egui::Key::ArrowUp) {
        if ctrl {
            delta.z += step;
        } else {
            delta.y -= step;
        }
    }
    if i.key_pressed(egui::Key::ArrowDown) {
        if ctrl {
            delta.z -= step;
        } else {
            delta.y += step;
        }
    }
    (delta != Vec3::ZERO).then_some(delta)
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    has_selection: bool,
    options: &EditorOptions,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Viewpoints 1–4
    for (index, key) in VIEWPOINT_KEYS.iter().enumerate().take(VIEWPOINTS.len()) {
        if !modifiers.command && ui.input(|i| i.key_pressed(*key)) {
            events.push(AppIntent::ViewpointSnapRequested { index });
        }
    }

    let (key_del_pressed, key_n_pressed, key_r_pressed, key_home_pressed, key_escape_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Home),
                i.key_pressed(egui::Key::Escape),
            )
        });

    if key_n_pressed && !modifiers.command {
        events.push(AppIntent::AddVertexRequested { position: None });
    }

    if key_r_pressed && !modifiers.command {
        events.push(AppIntent::ResetTrackRequested);
    }

    if key_home_pressed {
        events.push(AppIntent::ResetCameraRequested);
    }

    if has_selection {
        if key_del_pressed {
            events.push(AppIntent::DeleteSelectedRequested);
        }
        if key_escape_pressed {
            events.push(AppIntent::ClearSelectionRequested);
        }

        let step = options.nudge_step_for(modifiers.shift);
        if let Some(delta) = ui.input(|i| nudge_delta(i, step)) {
            events.push(AppIntent::NudgeSelectedRequested { delta });
        }
    }

    events
}

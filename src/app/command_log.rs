//! Verlauf ausgeführter Commands (Diagnose, Tests).

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
///
/// Hochfrequente Commands (Kamera-Tick, Hover, Maus-Bewegung) werden nicht
/// aufgezeichnet.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if Self::is_per_frame(command) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    fn is_per_frame(command: &AppCommand) -> bool {
        matches!(
            command,
            AppCommand::TickCamera { .. }
                | AppCommand::UpdateHover { .. }
                | AppCommand::UpdatePointerGesture { .. }
                | AppCommand::SetViewportSize { .. }
        )
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt aufgezeichneter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MovementInput;

    #[test]
    fn per_frame_commands_are_skipped() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::TickCamera {
            movement: MovementInput::default(),
        });
        log.record(&AppCommand::UpdateHover { pos: None });
        log.record(&AppCommand::Undo);

        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some(&AppCommand::Undo));
    }

    #[test]
    fn log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..(CommandLog::MAX_ENTRIES + 1) {
            log.record(&AppCommand::ResetCamera);
        }
        assert!(log.len() <= CommandLog::MAX_ENTRIES);
        assert!(!log.is_empty());
    }
}

use super::SelectionState;
use crate::core::Track;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1);
/// der Klon der Strecke findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Strecke (Arc-Klon für O(1)-Snapshot)
    pub track: Arc<Track>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            track: state.track.clone(),
            selection: state.selection,
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    ///
    /// Hover-Zustand gehört nicht zur Historie und wird verworfen.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.track = self.track;
        state.selection.selected = self.selection.selected;
        state.selection.hovered = None;
        state.selection.hovered_axis = None;
        state.interaction.reset();
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth: max_depth.max(1),
        }
    }

    /// Legt einen vorab erstellten Snapshot ab und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }

    /// Verwirft alle Einträge.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::PointRef;
    use glam::Vec3;

    fn make_snapshot_with_vertex_count(count: usize) -> Snapshot {
        let mut track = Track::new();
        for i in 0..count {
            let f = i as f32;
            track.add_vertex(Vec3::new(f * 10.0, f * 7.0, 0.0));
        }
        Snapshot {
            track: Arc::new(track),
            selection: SelectionState::new(),
        }
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_vertex_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_vertex_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.track.vertex_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_vertex_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_vertex_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_vertex_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.track.vertex_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_vertex_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_vertex_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_vertex_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_vertex_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_vertex_count(9));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn snapshot_apply_to_restores_state() {
        let mut original = AppState::new();
        original.selection.selected = Some(PointRef::control(1));
        let snap = Snapshot::from_state(&original);

        let mut target = AppState::new();
        target.track_mut().add_vertex(Vec3::ONE);
        target.selection.hovered = Some(PointRef::vertex(0));
        snap.apply_to(&mut target);

        assert_eq!(target.vertex_count(), 3);
        assert_eq!(target.selection.selected, Some(PointRef::control(1)));
        assert!(target.selection.hovered.is_none());
    }

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let mut state = AppState::new();
        let snap = Snapshot::from_state(&state);
        state.track_mut().delete_vertex(0);
        assert_eq!(snap.track.vertex_count(), 3);
        assert_eq!(state.vertex_count(), 2);
    }
}

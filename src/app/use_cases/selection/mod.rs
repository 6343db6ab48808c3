//! Use-Case-Funktionen für Punkt-Selektion.
//!
//! - `pick`: Hit-Test und Hover-Feedback
//! - `drag`: Maus-Gesten: Klick, Umsehen, Punkt ziehen

mod drag;
mod pick;

pub use drag::{begin_gesture, end_gesture, update_gesture};
pub use pick::{hovered_axis, pick_point, update_hover};

use crate::app::AppState;
use crate::core::PointRef;

/// Selektiert einen Punkt, sofern er existiert.
pub fn select_point(state: &mut AppState, point: PointRef) {
    if !state.track.contains(point) {
        log::debug!("Selektion ignoriert: {:?} existiert nicht", point);
        return;
    }
    if state.selection.selected != Some(point) {
        state.selection.hovered_axis = None;
    }
    state.selection.selected = Some(point);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected = None;
    state.selection.hovered_axis = None;
}

/// Gleicht die `selected`/`hovered`-Flags der Punkte mit dem Zustand ab.
///
/// Die Strecke wird nur angefasst, wenn sich ein Flag geändert hat.
pub fn sync_point_flags(state: &mut AppState) {
    let selected = state.selection.selected;
    let hovered = state.selection.hovered;
    if !state.track.flags_match(selected, hovered) {
        state.track_mut().refresh_flags(selected, hovered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn sync_point_flags_only_touches_track_on_change() {
        let mut state = AppState::new();
        let before = state.track.clone();
        sync_point_flags(&mut state);
        assert!(Arc::ptr_eq(&before, &state.track));

        state.selection.selected = Some(PointRef::vertex(1));
        state.selection.hovered = Some(PointRef::control(0));
        sync_point_flags(&mut state);

        assert!(state.track.vertices()[1].selected);
        assert!(!state.track.vertices()[0].selected);
        assert!(state.track.control(0).is_some_and(|c| c.hovered));
    }

    #[test]
    fn select_point_ignores_missing_point() {
        let mut state = AppState::new();
        select_point(&mut state, PointRef::vertex(99));
        assert!(state.selection.selected.is_none());

        select_point(&mut state, PointRef::control(1));
        assert_eq!(state.selection.selected, Some(PointRef::control(1)));

        clear_selection(&mut state);
        assert!(state.selection.selected.is_none());
    }
}

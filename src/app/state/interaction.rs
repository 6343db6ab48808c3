use crate::core::{Axis, PointRef};
use glam::{Vec2, Vec3};

/// Strategie, mit der ein Punkt unter dem Mauszeiger bewegt wird.
///
/// Wird beim Drücken der Maustaste festgelegt und gilt bis zum Loslassen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragStrategy {
    /// Kein Punkt wird gezogen (Umsehen oder Klick)
    #[default]
    None,
    /// Punkt folgt dem Mausstrahl in einer kamerazugewandten Ebene
    MovePointInPlane {
        target: PointRef,
        /// Ursprüngliche Position des Punkts
        plane_origin: Vec3,
        /// Kamera-Blickrichtung beim Start
        plane_normal: Vec3,
        /// Abstand Punkt minus Strahl-Treffer beim Start
        grab_offset: Vec3,
    },
    /// Punkt wird entlang einer Welt-Achse gezogen
    DragAxisHandle { target: PointRef, axis: Axis },
}

impl DragStrategy {
    /// Gezogener Punkt, falls vorhanden.
    pub fn target(&self) -> Option<PointRef> {
        match self {
            DragStrategy::None => None,
            DragStrategy::MovePointInPlane { target, .. }
            | DragStrategy::DragAxisHandle { target, .. } => Some(*target),
        }
    }

    /// Gezogene Gizmo-Achse, falls vorhanden.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            DragStrategy::DragAxisHandle { axis, .. } => Some(*axis),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DragStrategy::None)
    }
}

/// Laufende Geste der primären Maustaste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGesture {
    /// Position beim Drücken
    pub down_pos: Vec2,
    /// Letzte bekannte Position
    pub last_pos: Vec2,
    /// Zurückgelegter Mausweg in Pixeln
    pub travelled: f32,
    /// Schwelle überschritten: Ziehen statt Klick
    pub is_drag: bool,
}

impl PointerGesture {
    pub fn new(pos: Vec2) -> Self {
        Self {
            down_pos: pos,
            last_pos: pos,
            travelled: 0.0,
            is_drag: false,
        }
    }

    /// Verbucht eine neue Mausposition; gibt das Delta zurück.
    pub fn advance(&mut self, pos: Vec2, threshold_px: f32) -> Vec2 {
        let delta = pos - self.last_pos;
        self.travelled += delta.length();
        self.last_pos = pos;
        if self.travelled > threshold_px {
            self.is_drag = true;
        }
        delta
    }
}

/// Zustand der Viewport-Interaktion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionState {
    pub gesture: Option<PointerGesture>,
    pub drag: DragStrategy,
    /// Undo-Snapshot für diese Geste bereits angelegt
    pub edit_recorded: bool,
}

impl InteractionState {
    /// Beendet Geste und Ziehen bedingungslos.
    pub fn reset(&mut self) {
        self.gesture = None;
        self.drag = DragStrategy::None;
        self.edit_recorded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_becomes_drag_after_threshold() {
        let mut g = PointerGesture::new(Vec2::new(100.0, 100.0));
        g.advance(Vec2::new(102.0, 100.0), 4.0);
        assert!(!g.is_drag);
        g.advance(Vec2::new(102.0, 103.0), 4.0);
        assert!(g.is_drag);
    }

    #[test]
    fn back_and_forth_motion_counts_cumulatively() {
        let mut g = PointerGesture::new(Vec2::ZERO);
        for i in 0..3 {
            let x = if i % 2 == 0 { 2.0 } else { 0.0 };
            g.advance(Vec2::new(x, 0.0), 4.0);
        }
        assert!(g.is_drag);
        assert_eq!(g.last_pos, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn strategy_reports_target_and_axis() {
        let drag = DragStrategy::DragAxisHandle {
            target: PointRef::vertex(2),
            axis: Axis::Y,
        };
        assert_eq!(drag.target(), Some(PointRef::vertex(2)));
        assert_eq!(drag.axis(), Some(Axis::Y));
        assert!(DragStrategy::None.target().is_none());
    }
}

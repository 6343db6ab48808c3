use crate::core::{Axis, PointRef};

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionState {
    /// Höchstens ein selektierter Punkt (Vertex oder Kontrollpunkt)
    pub selected: Option<PointRef>,
    /// Punkt unter dem Mauszeiger (jeden Frame neu bestimmt)
    pub hovered: Option<PointRef>,
    /// Gizmo-Achse unter dem Mauszeiger
    pub hovered_axis: Option<Axis>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt Selektion und Hover-Zustand auf.
    pub fn clear(&mut self) {
        self.selected = None;
        self.hovered = None;
        self.hovered_axis = None;
    }
}

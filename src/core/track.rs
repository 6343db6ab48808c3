//! Strecken-Datenmodell: Vertices, Kontrollpunkte und abgeleitete Kurven.
//!
//! `controls[i]` formt das Segment zwischen `vertices[i]` und
//! `vertices[i + 1]`. Löschen verschiebt alle folgenden Indizes; externe
//! Referenzen per Index müssen danach neu geprüft werden.

use super::math::midpoint;
use glam::Vec3;

/// Standard-Anzahl Liniensegmente pro Bezier-Kurve.
pub const DEFAULT_CURVE_SAMPLES: usize = 50;

/// Positionen der Start-Strecke.
pub const DEFAULT_TRACK: [Vec3; 3] = [
    Vec3::new(-200.0, 0.0, -300.0),
    Vec3::new(0.0, -100.0, 0.0),
    Vec3::new(200.0, 0.0, 300.0),
];

/// Art eines Punkts der Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Strecken-Vertex
    Vertex,
    /// Bezier-Kontrollpunkt eines Segments
    Control,
}

/// Referenz auf einen Punkt per Index und Art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub index: usize,
    pub kind: PointKind,
}

impl PointRef {
    pub fn vertex(index: usize) -> Self {
        Self {
            index,
            kind: PointKind::Vertex,
        }
    }

    pub fn control(index: usize) -> Self {
        Self {
            index,
            kind: PointKind::Control,
        }
    }

    pub fn is_control(&self) -> bool {
        self.kind == PointKind::Control
    }
}

/// Ein Punkt der Strecke.
///
/// `selected`/`hovered` sind reine UI-Flags, werden jeden Frame neu gesetzt
/// und nicht persistiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub is_control: bool,
    pub selected: bool,
    pub hovered: bool,
}

impl Vertex {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            is_control: false,
            selected: false,
            hovered: false,
        }
    }

    pub fn new_control(position: Vec3) -> Self {
        Self {
            is_control: true,
            ..Self::new(position)
        }
    }
}

/// Quadratisches Bezier-Segment mit vorberechneten Stützpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSegment {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
    /// `samples + 1` Punkte von `start` bis `end`
    pub points: Vec<Vec3>,
}

impl CurveSegment {
    pub fn new(start: Vec3, control: Vec3, end: Vec3, samples: usize) -> Self {
        Self {
            start,
            control,
            end,
            points: sample_quadratic_bezier(start, control, end, samples),
        }
    }
}

/// `B(t) = (1-t)²·P0 + 2t(1-t)·P1 + t²·P2`
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

/// Tastet die Kurve an `t = i/n` für `i` in `0..=n` ab.
pub fn sample_quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, samples: usize) -> Vec<Vec3> {
    let n = samples.max(1);
    (0..=n)
        .map(|i| quadratic_bezier(p0, p1, p2, i as f32 / n as f32))
        .collect()
}

/// Geordnete Vertex-Folge plus ein optionaler Kontrollpunkt pro Segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    vertices: Vec<Vertex>,
    controls: Vec<Option<Vertex>>,
    curves: Vec<CurveSegment>,
    samples: usize,
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

impl Track {
    /// Leere Strecke mit Standard-Abtastung.
    pub fn new() -> Self {
        Self::with_samples(DEFAULT_CURVE_SAMPLES)
    }

    /// Leere Strecke mit eigener Abtastung pro Segment.
    pub fn with_samples(samples: usize) -> Self {
        Self {
            vertices: Vec::new(),
            controls: Vec::new(),
            curves: Vec::new(),
            samples: samples.max(1),
        }
    }

    /// Start-Strecke aus drei Vertices.
    pub fn default_track(samples: usize) -> Self {
        let mut track = Self::with_samples(samples);
        for position in DEFAULT_TRACK {
            track.add_vertex(position);
        }
        track
    }

    /// Baut eine Strecke aus gespeicherten Positionen.
    ///
    /// Überzählige Kontrollpunkte werden verworfen, fehlende beim
    /// Neuaufbau am Segment-Mittelpunkt ergänzt.
    pub fn from_positions(
        vertices: impl IntoIterator<Item = Vec3>,
        controls: impl IntoIterator<Item = Option<Vec3>>,
        samples: usize,
    ) -> Self {
        let mut track = Self::with_samples(samples);
        track.vertices = vertices.into_iter().map(Vertex::new).collect();
        track.controls = controls
            .into_iter()
            .map(|c| c.map(Vertex::new_control))
            .collect();
        track.rebuild_curves();
        track
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn controls(&self) -> &[Option<Vertex>] {
        &self.controls
    }

    pub fn curves(&self) -> &[CurveSegment] {
        &self.curves
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Anzahl der Segmente (`max(0, n - 1)`).
    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn control(&self, index: usize) -> Option<&Vertex> {
        self.controls.get(index).and_then(Option::as_ref)
    }

    /// Position eines referenzierten Punkts.
    pub fn point_position(&self, point: PointRef) -> Option<Vec3> {
        match point.kind {
            PointKind::Vertex => self.vertex(point.index).map(|v| v.position),
            PointKind::Control => self.control(point.index).map(|c| c.position),
        }
    }

    /// Referenz zeigt auf einen existierenden Punkt.
    pub fn contains(&self, point: PointRef) -> bool {
        self.point_position(point).is_some()
    }

    /// Hängt einen Vertex an und baut die Kurven neu.
    ///
    /// Ab dem zweiten Vertex entsteht der Kontrollpunkt des neuen Segments
    /// am Mittelpunkt. Gibt den Index des neuen Vertex zurück.
    pub fn add_vertex(&mut self, position: Vec3) -> usize {
        self.vertices.push(Vertex::new(position));
        let n = self.vertices.len();
        if n >= 2 {
            let mid = midpoint(self.vertices[n - 2].position, position);
            self.controls.truncate(n - 2);
            self.controls.push(Some(Vertex::new_control(mid)));
        }
        self.rebuild_curves();
        n - 1
    }

    /// Entfernt einen Vertex samt dem zugehörigen Kontrollpunkt.
    ///
    /// Beim letzten Vertex fällt der Kontrollpunkt davor weg, sonst der am
    /// selben Index. Ungültiger Index: keine Änderung, `false`.
    pub fn delete_vertex(&mut self, index: usize) -> bool {
        let n = self.vertices.len();
        if index >= n {
            return false;
        }
        self.vertices.remove(index);

        let control_index = if index == n - 1 {
            index.checked_sub(1)
        } else {
            Some(index)
        };
        if let Some(ci) = control_index {
            if ci < self.controls.len() {
                self.controls.remove(ci);
            }
        }

        self.rebuild_curves();
        true
    }

    /// Setzt die Position eines Vertex. Kurven baut der Aufrufer neu.
    pub fn update_vertex_position(&mut self, index: usize, position: Vec3) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => {
                v.position = position;
                true
            }
            None => false,
        }
    }

    /// Setzt die Position eines Kontrollpunkts. Kurven baut der Aufrufer neu.
    ///
    /// Ein leerer Slot innerhalb der Segmentanzahl wird dabei belegt.
    pub fn update_control_position(&mut self, index: usize, position: Vec3) -> bool {
        if index >= self.segment_count() {
            return false;
        }
        if self.controls.len() <= index {
            self.controls.resize(index + 1, None);
        }
        match &mut self.controls[index] {
            Some(c) => c.position = position,
            slot @ None => *slot = Some(Vertex::new_control(position)),
        }
        true
    }

    /// Setzt die Position eines beliebigen Punkts (ohne Neuaufbau).
    pub fn set_point_position(&mut self, point: PointRef, position: Vec3) -> bool {
        match point.kind {
            PointKind::Vertex => self.update_vertex_position(point.index, position),
            PointKind::Control => self.update_control_position(point.index, position),
        }
    }

    /// Leert einen Kontroll-Slot; der Neuaufbau setzt ihn auf den Mittelpunkt.
    pub fn reset_control(&mut self, index: usize) -> bool {
        match self.controls.get_mut(index) {
            Some(slot) => {
                *slot = None;
                self.rebuild_curves();
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.controls.clear();
        self.curves.clear();
    }

    /// Leitet die Kurvensegmente neu ab.
    ///
    /// Fehlende Kontrollpunkte entstehen am Mittelpunkt; vorhandene bleiben
    /// unverändert.
    pub fn rebuild_curves(&mut self) {
        let segments = self.segment_count();
        self.controls.truncate(segments);
        self.controls.resize(segments, None);

        self.curves.clear();
        for i in 0..segments {
            let start = self.vertices[i].position;
            let end = self.vertices[i + 1].position;
            let control = self.controls[i]
                .get_or_insert_with(|| Vertex::new_control(midpoint(start, end)))
                .position;
            self.curves
                .push(CurveSegment::new(start, control, end, self.samples));
        }
    }

    /// Setzt die UI-Flags aller Punkte neu.
    pub fn refresh_flags(&mut self, selected: Option<PointRef>, hovered: Option<PointRef>) {
        for (i, v) in self.vertices.iter_mut().enumerate() {
            let me = Some(PointRef::vertex(i));
            v.selected = me == selected;
            v.hovered = me == hovered;
        }
        for (i, slot) in self.controls.iter_mut().enumerate() {
            if let Some(c) = slot {
                let me = Some(PointRef::control(i));
                c.selected = me == selected;
                c.hovered = me == hovered;
            }
        }
    }

    /// Prüft, ob alle UI-Flags bereits zu Selektion und Hover passen.
    pub fn flags_match(&self, selected: Option<PointRef>, hovered: Option<PointRef>) -> bool {
        let vertices_ok = self.vertices.iter().enumerate().all(|(i, v)| {
            let me = Some(PointRef::vertex(i));
            v.selected == (me == selected) && v.hovered == (me == hovered)
        });
        vertices_ok
            && self.controls.iter().enumerate().all(|(i, slot)| {
                slot.as_ref().is_none_or(|c| {
                    let me = Some(PointRef::control(i));
                    c.selected == (me == selected) && c.hovered == (me == hovered)
                })
            })
    }

    /// Alle existierenden Punkte: erst Vertices, dann Kontrollpunkte.
    pub fn points(&self) -> impl Iterator<Item = (PointRef, Vec3)> + '_ {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (PointRef::vertex(i), v.position));
        let controls = self
            .controls
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (PointRef::control(i), c.position)));
        vertices.chain(controls)
    }
}

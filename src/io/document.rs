//! JSON-Dokument für Export/Import einer Strecke samt Kamera-Pose.
//!
//! Format: `{vertices:[{x,y,z}…], controls:[{x,y,z}|null…],
//! meta:{camera:{x,y,z,yaw,pitch}, moveSpeed}}`.
//!
//! Der Import ist nachsichtig: fehlende oder nicht-numerische Koordinaten
//! werden 0, Vertex-Einträge ohne Objekt werden übersprungen, defekte
//! Kontrollpunkte werden zu leeren Slots.

use crate::core::{Camera3D, Track};
use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Punkt im Dokument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for DocPoint {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<DocPoint> for Vec3 {
    fn from(p: DocPoint) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

/// Kamera-Pose im Dokument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    pub fn from_camera(camera: &Camera3D) -> Self {
        Self {
            x: camera.position.x,
            y: camera.position.y,
            z: camera.position.z,
            yaw: camera.yaw,
            pitch: camera.pitch,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Überträgt die Pose auf eine Kamera und stoppt laufende Bewegung.
    pub fn apply_to(&self, camera: &mut Camera3D) {
        camera.position = self.position();
        camera.yaw = self.yaw;
        camera.pitch = self.pitch;
        camera.velocity = Vec3::ZERO;
        camera.yaw_velocity = 0.0;
        camera.pitch_velocity = 0.0;
        camera.cancel_snap();
    }
}

/// Metadaten: Kamera und Bewegungsgeschwindigkeit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub camera: CameraPose,
    #[serde(rename = "moveSpeed")]
    pub move_speed: f32,
}

/// Vollständiges Export-Dokument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDocument {
    pub vertices: Vec<DocPoint>,
    pub controls: Vec<Option<DocPoint>>,
    /// Beim Import optional; fehlt es, bleibt die Kamera unverändert.
    pub meta: Option<DocumentMeta>,
}

impl TrackDocument {
    /// Erfasst Strecke und Kamera.
    pub fn capture(track: &Track, camera: &Camera3D) -> Self {
        Self {
            vertices: track
                .vertices()
                .iter()
                .map(|v| v.position.into())
                .collect(),
            controls: track
                .controls()
                .iter()
                .map(|c| c.map(|c| c.position.into()))
                .collect(),
            meta: Some(DocumentMeta {
                camera: CameraPose::from_camera(camera),
                move_speed: camera.tuning.move_speed,
            }),
        }
    }

    /// Baut eine Strecke aus den Dokument-Punkten.
    pub fn to_track(&self, samples: usize) -> Track {
        Track::from_positions(
            self.vertices.iter().map(|&p| Vec3::from(p)),
            self.controls.iter().map(|c| c.map(Vec3::from)),
            samples,
        )
    }
}

/// Schreibt ein Dokument als formatiertes JSON.
pub fn write_track_document(document: &TrackDocument) -> Result<String> {
    serde_json::to_string_pretty(document).context("Dokument nicht serialisierbar")
}

/// Liest ein Dokument nachsichtig aus JSON-Text.
///
/// Fehler nur bei ungültigem JSON oder wenn die oberste Ebene kein Objekt ist.
pub fn parse_track_document(text: &str) -> Result<TrackDocument> {
    let root: Value = serde_json::from_str(text).context("Ungültiges JSON")?;
    let Some(obj) = root.as_object() else {
        bail!("Dokument ist kein JSON-Objekt");
    };

    let vertices = points_from_array(obj.get("vertices"));
    let controls = optional_points_from_array(obj.get("controls"));
    let meta = obj.get("meta").and_then(meta_from_value);

    Ok(TrackDocument {
        vertices,
        controls,
        meta,
    })
}

/// Zahl aus einem JSON-Feld, sonst 0.
pub(crate) fn number_field(value: &Value, key: &str) -> f32 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0) as f32
}

/// Punkt aus einem JSON-Objekt; `None` wenn kein Objekt.
pub(crate) fn point_from_value(value: &Value) -> Option<DocPoint> {
    if !value.is_object() {
        return None;
    }
    Some(DocPoint {
        x: number_field(value, "x"),
        y: number_field(value, "y"),
        z: number_field(value, "z"),
    })
}

/// Vertex-Liste; Einträge ohne Objekt werden übersprungen.
pub(crate) fn points_from_array(value: Option<&Value>) -> Vec<DocPoint> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let points: Vec<DocPoint> = items.iter().filter_map(point_from_value).collect();
    if points.len() < items.len() {
        log::warn!(
            "{} defekte Vertex-Einträge übersprungen",
            items.len() - points.len()
        );
    }
    points
}

/// Kontroll-Liste; Einträge ohne Objekt werden leere Slots.
pub(crate) fn optional_points_from_array(value: Option<&Value>) -> Vec<Option<DocPoint>> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(point_from_value).collect())
        .unwrap_or_default()
}

/// Kamera-Pose aus einem JSON-Objekt mit `x,y,z,yaw,pitch`.
pub(crate) fn pose_from_value(value: &Value) -> Option<CameraPose> {
    if !value.is_object() {
        return None;
    }
    Some(CameraPose {
        x: number_field(value, "x"),
        y: number_field(value, "y"),
        z: number_field(value, "z"),
        yaw: number_field(value, "yaw"),
        pitch: number_field(value, "pitch"),
    })
}

fn meta_from_value(value: &Value) -> Option<DocumentMeta> {
    let camera = pose_from_value(value.get("camera")?)?;
    let move_speed = value
        .get("moveSpeed")
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or_else(|| crate::core::CameraTuning::default().move_speed);
    Some(DocumentMeta { camera, move_speed })
}

//! Sitzungs-Persistenz über einen Schlüssel-Wert-Speicher.
//!
//! Schlüssel und Werte sind Strings; die Werte sind JSON-kodiert. Fehler
//! des Speichers werden protokolliert und verschluckt, die Sitzung läuft
//! dann nur im Speicher weiter.

use super::document::{
    optional_points_from_array, point_from_value, points_from_array, CameraPose, DocPoint,
};
use crate::core::{Camera3D, Track};
use anyhow::Result;
use glam::Vec3;
use serde_json::{json, Value};
use std::collections::HashMap;

pub const KEY_CAMERA_POS: &str = "cameraPos";
pub const KEY_CAMERA_YAW: &str = "cameraYaw";
pub const KEY_CAMERA_PITCH: &str = "cameraPitch";
pub const KEY_CONTROL_VERTICES: &str = "controlVertices";
pub const KEY_COASTER_VERTICES: &str = "coasterVertices";
pub const KEY_MOVE_SPEED: &str = "moveSpeed";

/// Minimale Schnittstelle eines String-Schlüssel-Wert-Speichers.
pub trait KeyValueStore {
    fn get_value(&self, key: &str) -> Option<String>;
    fn set_value(&mut self, key: &str, value: String) -> Result<()>;
}

/// Flüchtiger Speicher, z.B. für Tests oder ohne Persistenz-Backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// Simuliert einen nicht verfügbaren Speicher
    pub read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_value(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: String) -> Result<()> {
        if self.read_only {
            anyhow::bail!("Speicher ist schreibgeschützt");
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

impl<'a> KeyValueStore for dyn eframe::Storage + 'a {
    fn get_value(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn set_value(&mut self, key: &str, value: String) -> Result<()> {
        self.set_string(key, value);
        Ok(())
    }
}

/// Wiederhergestellte Sitzungsdaten.
///
/// Jeder Teil ist optional; fehlende Teile bleiben beim Anwenden unverändert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionData {
    /// `None` wenn keine Strecke gespeichert ist
    pub vertices: Option<Vec<Vec3>>,
    pub controls: Vec<Option<Vec3>>,
    pub camera_position: Option<Vec3>,
    pub camera_yaw: Option<f32>,
    pub camera_pitch: Option<f32>,
    pub move_speed: Option<f32>,
}

impl SessionData {
    /// Baut die gespeicherte Strecke, `None` wenn keine vorhanden ist.
    pub fn track(&self, samples: usize) -> Option<Track> {
        let vertices = self.vertices.as_ref()?;
        Some(Track::from_positions(
            vertices.iter().copied(),
            self.controls.iter().copied(),
            samples,
        ))
    }

    /// Überträgt gespeicherte Kamerawerte auf die Kamera.
    pub fn apply_camera(&self, camera: &mut Camera3D) {
        if let Some(position) = self.camera_position {
            camera.position = position;
        }
        if let Some(yaw) = self.camera_yaw {
            camera.yaw = yaw;
        }
        if let Some(pitch) = self.camera_pitch {
            let limit = std::f32::consts::FRAC_PI_2 - camera.tuning.pitch_margin;
            camera.pitch = pitch.clamp(-limit, limit);
        }
        if let Some(speed) = self.move_speed {
            camera.tuning.set_move_speed(speed);
        }
    }
}

fn parse_json(store: &(impl KeyValueStore + ?Sized), key: &str) -> Option<Value> {
    let raw = store.get_value(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Gespeicherter Wert '{}' unlesbar: {}", key, e);
            None
        }
    }
}

fn parse_number(store: &(impl KeyValueStore + ?Sized), key: &str) -> Option<f32> {
    parse_json(store, key)?.as_f64().map(|v| v as f32)
}

/// Liest die Sitzung aus dem Speicher.
pub fn load_session(store: &(impl KeyValueStore + ?Sized)) -> SessionData {
    let vertices = parse_json(store, KEY_COASTER_VERTICES)
        .filter(Value::is_array)
        .map(|v| {
            points_from_array(Some(&v))
                .into_iter()
                .map(Vec3::from)
                .collect()
        });
    let controls = parse_json(store, KEY_CONTROL_VERTICES)
        .map(|v| {
            optional_points_from_array(Some(&v))
                .into_iter()
                .map(|c| c.map(Vec3::from))
                .collect()
        })
        .unwrap_or_default();
    let camera_position = parse_json(store, KEY_CAMERA_POS)
        .as_ref()
        .and_then(point_from_value)
        .map(Vec3::from);

    SessionData {
        vertices,
        controls,
        camera_position,
        camera_yaw: parse_number(store, KEY_CAMERA_YAW),
        camera_pitch: parse_number(store, KEY_CAMERA_PITCH),
        move_speed: parse_number(store, KEY_MOVE_SPEED),
    }
}

/// Schreibt Strecke und Kamera in den Speicher.
///
/// Fehler werden als Warnung protokolliert; gibt die Anzahl erfolgreich
/// geschriebener Schlüssel zurück.
pub fn save_session(
    store: &mut (impl KeyValueStore + ?Sized),
    track: &Track,
    camera: &Camera3D,
) -> usize {
    let pose = CameraPose::from_camera(camera);
    let vertices: Vec<DocPoint> = track
        .vertices()
        .iter()
        .map(|v| v.position.into())
        .collect();
    let controls: Vec<Option<DocPoint>> = track
        .controls()
        .iter()
        .map(|c| c.map(|c| c.position.into()))
        .collect();

    let entries = [
        (KEY_CAMERA_POS, json!({"x": pose.x, "y": pose.y, "z": pose.z})),
        (KEY_CAMERA_YAW, json!(pose.yaw)),
        (KEY_CAMERA_PITCH, json!(pose.pitch)),
        (KEY_CONTROL_VERTICES, json!(controls)),
        (KEY_COASTER_VERTICES, json!(vertices)),
        (KEY_MOVE_SPEED, json!(camera.tuning.move_speed)),
    ];

    let mut written = 0;
    for (key, value) in entries {
        match store.set_value(key, value.to_string()) {
            Ok(()) => written += 1,
            Err(e) => log::warn!("Sitzungswert '{}' nicht gespeichert: {:#}", key, e),
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CameraTuning, DEFAULT_CURVE_SAMPLES};
    use approx::assert_relative_eq;

    #[test]
    fn empty_store_has_no_track() {
        let store = MemoryStore::new();
        let session = load_session(&store);
        assert!(session.track(DEFAULT_CURVE_SAMPLES).is_none());
        assert_eq!(session, SessionData::default());
    }

    #[test]
    fn save_then_load_restores_track_and_camera() {
        let mut track = Track::default_track(DEFAULT_CURVE_SAMPLES);
        track.update_control_position(1, Vec3::new(1.0, 2.0, 3.0));
        track.rebuild_curves();
        let mut camera = Camera3D::default();
        camera.position = Vec3::new(10.0, -20.0, 30.0);
        camera.yaw = 0.7;
        camera.pitch = -0.3;
        camera.tuning.move_speed = 18.0;

        let mut store = MemoryStore::new();
        assert_eq!(save_session(&mut store, &track, &camera), 6);
        assert_eq!(store.len(), 6);

        let session = load_session(&store);
        let restored = session.track(DEFAULT_CURVE_SAMPLES).expect("Strecke gespeichert");
        assert_eq!(restored.vertex_count(), 3);
        assert_eq!(
            restored.control(1).map(|c| c.position),
            Some(Vec3::new(1.0, 2.0, 3.0))
        );

        let mut other = Camera3D::default();
        session.apply_camera(&mut other);
        assert_eq!(other.position, camera.position);
        assert_relative_eq!(other.yaw, 0.7);
        assert_relative_eq!(other.pitch, -0.3);
        assert_relative_eq!(other.tuning.move_speed, 18.0);
    }

    #[test]
    fn invalid_stored_move_speed_keeps_current() {
        let mut store = MemoryStore::new();
        store
            .set_value(KEY_MOVE_SPEED, "-5".to_string())
            .expect("schreibbar");

        let mut camera = Camera3D::default();
        load_session(&store).apply_camera(&mut camera);

        assert_eq!(camera.tuning.move_speed, CameraTuning::default().move_speed);
    }

    #[test]
    fn read_only_store_is_swallowed() {
        let track = Track::default_track(DEFAULT_CURVE_SAMPLES);
        let mut store = MemoryStore {
            read_only: true,
            ..Default::default()
        };
        assert_eq!(save_session(&mut store, &track, &Camera3D::default()), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_values_are_ignored() {
        let mut store = MemoryStore::new();
        store
            .set_value(KEY_COASTER_VERTICES, "{broken".to_string())
            .expect("schreibbar");
        store
            .set_value(KEY_CAMERA_YAW, "\"text\"".to_string())
            .expect("schreibbar");
        let session = load_session(&store);
        assert!(session.vertices.is_none());
        assert!(session.camera_yaw.is_none());
    }

    #[test]
    fn stored_pose_fields_default_to_zero() {
        let mut store = MemoryStore::new();
        store
            .set_value(KEY_CAMERA_POS, r#"{"x": 4}"#.to_string())
            .expect("schreibbar");
        let session = load_session(&store);
        assert_eq!(session.camera_position, Some(Vec3::new(4.0, 0.0, 0.0)));
    }
}

use coaster_track_editor::io::{load_session, save_session, MemoryStore};
use coaster_track_editor::{parse_track_document, write_track_document};
use coaster_track_editor::{Camera3D, Track, TrackDocument};
use glam::Vec3;

#[test]
fn test_export_contains_documented_keys() {
    let track = Track::default_track(8);
    let camera = Camera3D::default();

    let json = write_track_document(&TrackDocument::capture(&track, &camera))
        .expect("Export sollte gelingen");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");

    assert_eq!(value["vertices"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["controls"].as_array().map(Vec::len), Some(2));
    assert!(value["meta"]["camera"]["yaw"].is_number());
    assert!(value["meta"]["moveSpeed"].is_number());
}

#[test]
fn test_lenient_import_skips_bad_entries() {
    let text = r#"{
        "vertices": [{"x": 1, "y": 2, "z": 3}, "kaputt", {"x": 4}],
        "controls": [null]
    }"#;

    let document = parse_track_document(text).expect("Dokument sollte lesbar sein");
    let track = document.to_track(8);

    assert_eq!(track.vertex_count(), 2);
    assert_eq!(track.vertices()[1].position, Vec3::new(4.0, 0.0, 0.0));
    assert_eq!(track.controls().len(), 1);
    assert!(document.meta.is_none());
}

#[test]
fn test_invalid_json_is_rejected() {
    assert!(parse_track_document("[1, 2").is_err());
    assert!(parse_track_document("42").is_err());
}

#[test]
fn test_session_store_roundtrip() {
    let mut store = MemoryStore::new();
    let mut track = Track::default_track(8);
    track.update_control_position(1, Vec3::new(9.0, 8.0, 7.0));
    track.rebuild_curves();
    let mut camera = Camera3D::default();
    camera.position = Vec3::new(-5.0, 10.0, 300.0);
    camera.pitch = 0.25;

    assert_eq!(save_session(&mut store, &track, &camera), 6);

    let session = load_session(&store);
    let restored = session.track(8).expect("Strecke gespeichert");
    assert_eq!(restored, track);

    let mut restored_camera = Camera3D::default();
    session.apply_camera(&mut restored_camera);
    assert_eq!(restored_camera.position, camera.position);
    assert_eq!(restored_camera.pitch, 0.25);
}

//! Coaster Track Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    Axis, Camera3D, CameraTuning, CurveSegment, MovementInput, PointKind, PointRef, Projection,
    Ray, Track, Vertex, Viewpoint,
};
pub use io::{parse_track_document, write_track_document, KeyValueStore, TrackDocument};
pub use shared::{EditorOptions, RenderScene};

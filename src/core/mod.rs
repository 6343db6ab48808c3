//! Core-Domänentypen: Kamera, Projektion, Gizmo, Strecke.

pub mod camera;
pub mod gizmo;
pub mod math;
pub mod projection;
pub mod track;
pub mod viewpoint;

pub use camera::{forward_from_angles, Camera3D, CameraTuning, MovementInput, SnapTarget};
pub use gizmo::{check_axis_hover, Axis, GizmoSettings};
pub use math::{point_to_segment_distance_2d, ray_to_segment_distance_3d, Ray, WORLD_UP};
pub use projection::{Projection, ScreenProjection, FOV_Y, NEAR_PLANE, OFFSCREEN};
pub use track::{
    CurveSegment, PointKind, PointRef, Track, Vertex, DEFAULT_CURVE_SAMPLES, DEFAULT_TRACK,
};
pub use viewpoint::{viewpoint, Viewpoint, VIEWPOINTS};

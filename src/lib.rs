//! Spline-Painter Library.
//! C1-stetige Bézier-Spline durch frei platzierte Anker, mit interaktiver Bearbeitung.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionState, PointerButton,
    PointerEvent, PointerKind,
};
pub use core::{
    build_composite_path, estimate_tangents, find_nearest, BezierSegment, CompositePath,
    ControlPair, DistanceMetric, HitMatch, PointStore, PointStoreError, Preset,
};
pub use shared::{EditorOptions, RenderScene};

//! Core-Domänentypen: Anker-Store, Tangenten, Bézier-Pfad, Hit-Test, Presets.
//!
//! Rein und egui-frei; wird von `app`, `shared` und `ui` konsumiert.

pub mod hit_test;
pub mod point_store;
pub mod preset;
/// Zusammengesetzte kubische Bézier-Spline
///
/// - `build_composite_path`: Anker → Tangenten → Kontrollpunkte → Pfad
/// - `CompositePath`: unveränderliche Ableitung für den Renderer
/// - `BezierSegment`: Auswertung, Ableitungen, Sampling
pub mod spline;
pub mod tangent;

pub use hit_test::{find_nearest, pick_within, DistanceMetric, HitMatch};
pub use point_store::{PointStore, PointStoreError};
pub use preset::Preset;
pub use spline::{
    build_composite_path, build_control_pairs, BezierSegment, CompositePath, ControlPair,
};
pub use tangent::estimate_tangents;

//! UI-Layer mit egui: Toolbar, Status-Bar, Zeichenflächen-Input und Painter.
//!
//! Enthält keine Spline-Logik; alles läuft über `AppIntent` hinein
//! und `RenderScene` heraus.

pub mod input;
pub mod painter;
pub mod status;
pub mod toolbar;

pub use input::collect_pointer_events;
pub use painter::paint_scene;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Anker-Store, abgeleiteter Pfad und Interaktions-Zustand.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerButton, PointerEvent, PointerKind};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, InteractionState};

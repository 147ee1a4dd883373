//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// Verarbeitet genau ein Ereignis vollständig, bevor das nächste kommt;
/// der Pfad-Neuaufbau läuft synchron im selben Aufruf.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`; nur erfolgreiche
    /// Commands werden im `CommandLog` eingetragen.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Anker ===
            AppCommand::AppendAnchor { position } => {
                handlers::editing::append_anchor(state, position)
            }
            AppCommand::DeleteAnchor { index } => handlers::editing::delete_anchor(state, index)?,
            AppCommand::ClearAnchors => handlers::editing::clear_anchors(state),
            AppCommand::LoadPreset { preset } => handlers::editing::load_preset(state, preset),

            // === Drag ===
            AppCommand::BeginDrag { index } => handlers::editing::begin_drag(state, index)?,
            AppCommand::MoveAnchor { index, position } => {
                handlers::editing::move_anchor(state, index, position)?
            }
            AppCommand::EndDrag => handlers::editing::end_drag(state),

            // === Darstellung ===
            AppCommand::SetControlHandlesVisible { visible } => {
                handlers::view::set_control_handles_visible(state, visible)
            }
            AppCommand::SetGuideLinesVisible { visible } => {
                handlers::view::set_guide_lines_visible(state, visible)
            }
        }

        state.command_log.record_executed(command);
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

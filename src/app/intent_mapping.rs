//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Zustandsmaschine der Zeiger-Interaktion:
//!
//! | Zustand     | Ereignis              | Commands                          |
//! |-------------|-----------------------|-----------------------------------|
//! | Idle        | Primär ↓ nahe Anker   | `BeginDrag`                       |
//! | Idle        | Primär ↓ sonst        | `AppendAnchor`                    |
//! | Idle        | Sekundär ↓ nahe Anker | `DeleteAnchor`                    |
//! | Dragging(i) | Bewegung              | `MoveAnchor { i }`                |
//! | Dragging(i) | Primär ↑              | `EndDrag`                         |
//!
//! Alles andere wird ignoriert (kein Fehler).

use super::events::{PointerButton, PointerEvent, PointerKind};
use super::state::InteractionState;
use super::{AppCommand, AppIntent, AppState};
use crate::core::pick_within;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::Pointer(event) => map_pointer_event(state, event),
        AppIntent::ClearRequested => vec![AppCommand::ClearAnchors],
        AppIntent::PresetRequested { preset } => vec![AppCommand::LoadPreset { preset }],
        AppIntent::ControlHandlesToggled { visible } => {
            vec![AppCommand::SetControlHandlesVisible { visible }]
        }
        AppIntent::GuideLinesToggled { visible } => {
            vec![AppCommand::SetGuideLinesVisible { visible }]
        }
    }
}

fn map_pointer_event(state: &AppState, event: PointerEvent) -> Vec<AppCommand> {
    let options = &state.options;
    let anchors = state.anchors();

    match (state.interaction, event.kind, event.button) {
        (InteractionState::Idle, PointerKind::Down, PointerButton::Primary) => {
            match pick_within(
                anchors,
                event.position,
                options.hit_metric,
                options.grab_radius,
            ) {
                Some(index) => vec![AppCommand::BeginDrag { index }],
                None => vec![AppCommand::AppendAnchor {
                    position: event.position,
                }],
            }
        }
        (InteractionState::Idle, PointerKind::Down, PointerButton::Secondary) => {
            match pick_within(
                anchors,
                event.position,
                options.hit_metric,
                options.delete_radius,
            ) {
                Some(index) => vec![AppCommand::DeleteAnchor { index }],
                None => Vec::new(),
            }
        }
        (InteractionState::Dragging { index }, PointerKind::Move, _) => {
            vec![AppCommand::MoveAnchor {
                index,
                position: event.position,
            }]
        }
        (InteractionState::Dragging { .. }, PointerKind::Up, PointerButton::Primary) => {
            vec![AppCommand::EndDrag]
        }
        (interaction, kind, button) => {
            log::trace!(
                "Zeiger-Ereignis ignoriert: {:?} {:?} im Zustand {:?}",
                kind,
                button,
                interaction
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests;

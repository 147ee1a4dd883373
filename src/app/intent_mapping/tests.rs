use crate::app::state::InteractionState;
use crate::app::{AppCommand, AppIntent, AppState, PointerButton, PointerEvent};
use crate::core::{DistanceMetric, Preset};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with(points: &[(f32, f32)]) -> AppState {
    let mut state = AppState::new();
    state
        .points
        .replace_all(points.iter().map(|&(x, y)| Vec2::new(x, y)));
    state.rebuild_path();
    state
}

fn down(button: PointerButton, x: f32, y: f32) -> AppIntent {
    AppIntent::Pointer(PointerEvent::down(button, Vec2::new(x, y)))
}

#[test]
fn primary_down_on_empty_canvas_appends() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, down(PointerButton::Primary, 5.0, 6.0));

    assert_eq!(
        commands,
        vec![AppCommand::AppendAnchor {
            position: Vec2::new(5.0, 6.0)
        }]
    );
}

#[test]
fn primary_down_near_anchor_begins_drag() {
    let state = state_with(&[(0.0, 0.0), (100.0, 0.0)]);

    let commands = map_intent_to_commands(&state, down(PointerButton::Primary, 103.0, 4.0));

    assert_eq!(commands, vec![AppCommand::BeginDrag { index: 1 }]);
}

#[test]
fn primary_down_at_threshold_appends() {
    // Manhattan-Distanz genau 10 → nicht strikt kleiner als Greif-Radius
    let state = state_with(&[(0.0, 0.0)]);

    let commands = map_intent_to_commands(&state, down(PointerButton::Primary, 6.0, 4.0));

    assert!(matches!(commands[0], AppCommand::AppendAnchor { .. }));
}

#[test]
fn euclidean_metric_widens_diagonal_grab() {
    let mut state = state_with(&[(0.0, 0.0)]);
    state.options.hit_metric = DistanceMetric::Euclidean;

    let commands = map_intent_to_commands(&state, down(PointerButton::Primary, 6.0, 4.0));

    assert_eq!(commands, vec![AppCommand::BeginDrag { index: 0 }]);
}

#[test]
fn secondary_down_far_from_anchors_is_noop() {
    let state = state_with(&[(0.0, 0.0), (100.0, 0.0)]);

    let commands = map_intent_to_commands(&state, down(PointerButton::Secondary, 50.0, 50.0));

    assert!(commands.is_empty());
}

#[test]
fn secondary_down_near_anchor_deletes() {
    let state = state_with(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

    let commands = map_intent_to_commands(&state, down(PointerButton::Secondary, 98.0, 97.0));

    assert_eq!(commands, vec![AppCommand::DeleteAnchor { index: 2 }]);
}

#[test]
fn move_while_idle_is_ignored() {
    let state = state_with(&[(0.0, 0.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::Pointer(PointerEvent::moved(Vec2::new(1.0, 1.0))),
    );

    assert!(commands.is_empty());
}

#[test]
fn move_while_dragging_moves_dragged_anchor() {
    let mut state = state_with(&[(0.0, 0.0), (10.0, 0.0)]);
    state.interaction = InteractionState::Dragging { index: 1 };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::Pointer(PointerEvent::moved(Vec2::new(20.0, 0.0))),
    );

    assert_eq!(
        commands,
        vec![AppCommand::MoveAnchor {
            index: 1,
            position: Vec2::new(20.0, 0.0)
        }]
    );
}

#[test]
fn down_while_dragging_is_ignored() {
    let mut state = state_with(&[(0.0, 0.0), (10.0, 0.0)]);
    state.interaction = InteractionState::Dragging { index: 0 };

    assert!(map_intent_to_commands(&state, down(PointerButton::Primary, 300.0, 300.0)).is_empty());
    assert!(map_intent_to_commands(&state, down(PointerButton::Secondary, 10.0, 0.0)).is_empty());
}

#[test]
fn only_primary_up_ends_drag() {
    let mut state = state_with(&[(0.0, 0.0)]);
    state.interaction = InteractionState::Dragging { index: 0 };

    let secondary_up = AppIntent::Pointer(PointerEvent::up(PointerButton::Secondary, Vec2::ZERO));
    assert!(map_intent_to_commands(&state, secondary_up).is_empty());

    let primary_up = AppIntent::Pointer(PointerEvent::up(
        PointerButton::Primary,
        Vec2::new(500.0, 500.0),
    ));
    assert_eq!(
        map_intent_to_commands(&state, primary_up),
        vec![AppCommand::EndDrag]
    );
}

#[test]
fn toolbar_intents_map_one_to_one() {
    let state = AppState::new();

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ClearRequested),
        vec![AppCommand::ClearAnchors]
    );
    assert_eq!(
        map_intent_to_commands(
            &state,
            AppIntent::PresetRequested {
                preset: Preset::House
            }
        ),
        vec![AppCommand::LoadPreset {
            preset: Preset::House
        }]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::GuideLinesToggled { visible: false }),
        vec![AppCommand::SetGuideLinesVisible { visible: false }]
    );
}

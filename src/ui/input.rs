//! Zeichenflächen-Input: egui-Zeigerzustand → `PointerEvent`-Intents.

use crate::app::{AppIntent, PointerButton, PointerEvent};
use glam::Vec2;

/// Wandelt eine Bildschirmposition in Szenen-Koordinaten (relativ zur Zeichenfläche).
pub fn screen_to_scene(pos: egui::Pos2, canvas: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - canvas.min.x, pos.y - canvas.min.y)
}

/// Sammelt Zeiger-Ereignisse dieses Frames als AppIntents.
///
/// Drücken zählt nur innerhalb der Zeichenfläche; Bewegen und Loslassen
/// werden auch außerhalb gemeldet, damit ein Drag am Rand nicht hängen bleibt.
pub fn collect_pointer_events(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (pointer_pos, primary_pressed, secondary_pressed, primary_released, moving) =
        ui.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.primary_pressed(),
                i.pointer.secondary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
            )
        });

    let Some(pointer_pos) = pointer_pos else {
        return events;
    };
    let canvas = response.rect;
    let position = screen_to_scene(pointer_pos, canvas);
    let inside = canvas.contains(pointer_pos);

    if primary_pressed && inside {
        events.push(AppIntent::Pointer(PointerEvent::down(
            PointerButton::Primary,
            position,
        )));
    }
    if secondary_pressed && inside {
        events.push(AppIntent::Pointer(PointerEvent::down(
            PointerButton::Secondary,
            position,
        )));
    }
    if moving && !primary_pressed {
        events.push(AppIntent::Pointer(PointerEvent::moved(position)));
    }
    if primary_released {
        events.push(AppIntent::Pointer(PointerEvent::up(
            PointerButton::Primary,
            position,
        )));
    }

    events
}

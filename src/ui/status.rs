//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Anker: {} | Segmente: {}",
                state.anchor_count(),
                state.segment_count()
            ));

            if let InteractionState::Dragging { index } = state.interaction() {
                ui.separator();
                ui.label(format!("Ziehe Anker {}", index));
            }
        });
    });
}

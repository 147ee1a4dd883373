//! Toolbar: Löschen, Presets, Overlay-Schalter.

use crate::app::{AppIntent, AppState};
use crate::core::Preset;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Punkte löschen").clicked() {
                events.push(AppIntent::ClearRequested);
            }

            ui.separator();
            ui.label("Vorlage:");
            for preset in Preset::ALL {
                if ui.button(preset.label()).clicked() {
                    events.push(AppIntent::PresetRequested { preset });
                }
            }

            ui.separator();

            let mut handles = state.options.show_control_handles;
            if ui.checkbox(&mut handles, "Kontrollpunkte").changed() {
                events.push(AppIntent::ControlHandlesToggled { visible: handles });
            }

            let mut guides = state.options.show_guide_lines;
            if ui.checkbox(&mut guides, "Hilfslinien").changed() {
                events.push(AppIntent::GuideLinesToggled { visible: guides });
            }
        });
        ui.label("Links: Punkt setzen oder ziehen. Rechts auf Punkt: löschen.");
    });

    events
}

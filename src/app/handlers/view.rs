//! Handler für Darstellungs-Optionen (Overlays).

use crate::app::AppState;

/// Kontrollpunkt-Overlay ein-/ausblenden.
pub fn set_control_handles_visible(state: &mut AppState, visible: bool) {
    state.options.show_control_handles = visible;
}

/// Gestricheltes Anker-Polygon ein-/ausblenden.
pub fn set_guide_lines_visible(state: &mut AppState, visible: bool) {
    state.options.show_guide_lines = visible;
}

//! Handler für Anker-Bearbeitung: Anhängen, Ziehen, Löschen, Presets.
//!
//! Jede strukturelle Änderung baut den Pfad synchron neu auf.

use crate::app::state::InteractionState;
use crate::app::AppState;
use crate::core::Preset;
use glam::Vec2;

/// Hängt einen neuen Anker an.
pub fn append_anchor(state: &mut AppState, position: Vec2) {
    let index = state.points.append(position);
    state.rebuild_path();
    log::info!(
        "Anker {} an Position ({:.1}, {:.1}) hinzugefügt",
        index,
        position.x,
        position.y
    );
}

/// Greift Anker `index` für einen Drag.
pub fn begin_drag(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    if index >= state.points.len() {
        anyhow::bail!(
            "Drag-Start auf ungültigem Anker {} (Anzahl: {})",
            index,
            state.points.len()
        );
    }
    state.interaction = InteractionState::Dragging { index };
    log::debug!("Drag gestartet: Anker {}", index);
    Ok(())
}

/// Verschiebt Anker `index` nach `position`.
pub fn move_anchor(state: &mut AppState, index: usize, position: Vec2) -> anyhow::Result<()> {
    state.points.replace(index, position)?;
    state.rebuild_path();
    log::debug!(
        "Anker {} verschoben nach ({:.1}, {:.1})",
        index,
        position.x,
        position.y
    );
    Ok(())
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.interaction.dragged_index() {
        log::debug!("Drag beendet: Anker {}", index);
    }
    state.interaction = InteractionState::Idle;
}

/// Löscht Anker `index`; nachfolgende Anker rücken auf.
pub fn delete_anchor(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let removed = state.points.delete(index)?;
    state.rebuild_path();
    log::info!(
        "Anker {} bei ({:.1}, {:.1}) gelöscht, {} verbleibend",
        index,
        removed.x,
        removed.y,
        state.points.len()
    );
    Ok(())
}

/// Entfernt alle Anker und bricht einen laufenden Drag ab.
pub fn clear_anchors(state: &mut AppState) {
    state.interaction = InteractionState::Idle;
    state.points.clear();
    state.rebuild_path();
    log::info!("Alle Anker entfernt");
}

/// Ersetzt die Anker durch eine Vorlage.
pub fn load_preset(state: &mut AppState, preset: Preset) {
    state.interaction = InteractionState::Idle;
    state.points.replace_all(preset.points());
    state.rebuild_path();
    log::info!(
        "Preset '{}' geladen: {} Anker",
        preset.label(),
        state.points.len()
    );
}

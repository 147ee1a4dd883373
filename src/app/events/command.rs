use crate::core::Preset;
use glam::Vec2;

/// Mutierende Commands, die der Controller auf den `AppState` anwendet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Neuen Anker am Ende anhängen
    AppendAnchor { position: Vec2 },
    /// Anker `index` greifen (Idle → Dragging)
    BeginDrag { index: usize },
    /// Gegriffenen Anker verschieben
    MoveAnchor { index: usize, position: Vec2 },
    /// Drag beenden (Dragging → Idle)
    EndDrag,
    /// Anker `index` löschen
    DeleteAnchor { index: usize },
    /// Alle Anker entfernen
    ClearAnchors,
    /// Anker durch Vorlage ersetzen
    LoadPreset { preset: Preset },
    /// Kontrollpunkt-Overlay setzen
    SetControlHandlesVisible { visible: bool },
    /// Anker-Polygon setzen
    SetGuideLinesVisible { visible: bool },
}

use crate::core::Preset;
use glam::Vec2;

/// Art eines Zeiger-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Maustaste eines Zeiger-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Links: Anker setzen oder greifen
    Primary,
    /// Rechts: Anker löschen
    Secondary,
}

/// Diskretes Zeiger-Ereignis aus der Eingabequelle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: PointerButton,
    /// Position in Szenen-Koordinaten
    pub position: Vec2,
}

impl PointerEvent {
    /// Taste gedrückt.
    pub fn down(button: PointerButton, position: Vec2) -> Self {
        Self {
            kind: PointerKind::Down,
            button,
            position,
        }
    }

    /// Zeiger bewegt (Taste ist für die Zustandsmaschine ohne Bedeutung).
    pub fn moved(position: Vec2) -> Self {
        Self {
            kind: PointerKind::Move,
            button: PointerButton::Primary,
            position,
        }
    }

    /// Taste losgelassen.
    pub fn up(button: PointerButton, position: Vec2) -> Self {
        Self {
            kind: PointerKind::Up,
            button,
            position,
        }
    }
}

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger-Ereignis im Zeichenbereich
    Pointer(PointerEvent),
    /// Alle Anker entfernen
    ClearRequested,
    /// Anker durch eine Vorlage ersetzen
    PresetRequested { preset: Preset },
    /// Kontrollpunkt-Overlay ein/aus
    ControlHandlesToggled { visible: bool },
    /// Gestricheltes Anker-Polygon ein/aus
    GuideLinesToggled { visible: bool },
}

//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{build_composite_path, CompositePath, PointStore};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

/// Zustand der Zeiger-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Kein Anker gegriffen
    #[default]
    Idle,
    /// Anker `index` folgt dem Zeiger
    Dragging { index: usize },
}

impl InteractionState {
    /// Index des gegriffenen Ankers, falls ein Drag läuft.
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Dragging { index } => Some(*index),
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Anker-Sequenz (einzige Quelle der Wahrheit)
    pub(crate) points: PointStore,
    /// Aus `points` abgeleiteter Pfad; None bei weniger als 2 Ankern
    pub(crate) path: Option<Arc<CompositePath>>,
    /// Idle oder Dragging
    pub(crate) interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Farben, Overlays)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            points: PointStore::new(),
            path: None,
            interaction: InteractionState::Idle,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Read-only Snapshot der Anker
    pub fn anchors(&self) -> &[Vec2] {
        self.points.get_all()
    }

    /// Aktueller Pfad (None bei weniger als 2 Ankern)
    pub fn path(&self) -> Option<&CompositePath> {
        self.path.as_deref()
    }

    /// Aktueller Interaktions-Zustand
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Gibt die Anzahl der Anker zurück (für UI-Anzeige)
    pub fn anchor_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.path.as_ref().map_or(0, |p| p.segment_count())
    }

    /// Baut den Pfad vollständig aus dem aktuellen Anker-Snapshot neu auf.
    pub(crate) fn rebuild_path(&mut self) {
        self.path = build_composite_path(self.points.get_all()).map(Arc::new);
        log::debug!(
            "Pfad neu aufgebaut: {} Anker, {} Segmente (Revision {})",
            self.points.len(),
            self.segment_count(),
            self.points.revision()
        );
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

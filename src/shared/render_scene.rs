//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Der Renderer liest nur; Rückwirkungen auf den Zustand gibt es nicht.

use super::options::EditorOptions;
use crate::core::{CompositePath, ControlPair};
use glam::Vec2;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Anker in Durchlaufreihenfolge
    pub anchors: Arc<[Vec2]>,
    /// Abgeleiteter Pfad (None bei weniger als 2 Ankern)
    pub path: Option<Arc<CompositePath>>,
    /// Index des gerade gezogenen Ankers (für Hervorhebung)
    pub dragged_index: Option<usize>,
    /// Laufzeit-Optionen für Farben, Größen, Overlays
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        self.path.is_some()
    }

    /// Kontrollpunkte für das Debug-Overlay (leer ohne Pfad).
    pub fn control_pairs(&self) -> &[ControlPair] {
        self.path
            .as_deref()
            .map(CompositePath::control_pairs)
            .unwrap_or(&[])
    }

    /// Gestrichelte Hilfslinien zwischen aufeinanderfolgenden Ankern.
    pub fn guide_lines(&self) -> Vec<(Vec2, Vec2)> {
        if !self.options.show_guide_lines {
            return Vec::new();
        }
        self.anchors.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Linien Anker → Kontrollpunkt (leer wenn Overlay aus oder kein Pfad).
    pub fn handle_lines(&self) -> Vec<(Vec2, Vec2)> {
        match (&self.path, self.options.show_control_handles) {
            (Some(path), true) => path.handle_lines(),
            _ => Vec::new(),
        }
    }
}

//! Zentrale Konfiguration für den Spline-Painter.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DistanceMetric;
use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Greif-Radius: Primärklick näher als dieser Wert startet einen Drag statt neuen Anker.
pub const GRAB_RADIUS: f32 = 10.0;
/// Lösch-Radius: Sekundärklick näher als dieser Wert löscht den Anker.
pub const DELETE_RADIUS: f32 = 10.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Stützpunkte pro Segment beim Abtasten der Kurve.
pub const SAMPLES_PER_SEGMENT: usize = 24;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_WIDTH_PX: f32 = 2.0;
/// Kurvenfarbe (RGBA: Blau).
pub const CURVE_COLOR: [u8; 4] = [10, 100, 200, 255];

// ── Anker & Kontrollpunkte ─────────────────────────────────────────

/// Anker-Radius in Pixeln.
pub const ANCHOR_RADIUS_PX: f32 = 4.0;
/// Anker-Farbe (RGBA: Schwarz).
pub const ANCHOR_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Farbe des gerade gezogenen Ankers (RGBA: Rot).
pub const ANCHOR_COLOR_DRAGGED: [u8; 4] = [220, 30, 30, 255];
/// Kontrollpunkt-Radius in Pixeln.
pub const CONTROL_POINT_RADIUS_PX: f32 = 3.0;
/// Farbe der Kontrollpunkte (RGBA: Hellrot).
pub const CONTROL_POINT_COLOR: [u8; 4] = [220, 120, 120, 255];
/// Farbe der Anker → Kontrollpunkt-Linien (RGBA: Dunkelrot).
pub const HANDLE_LINE_COLOR: [u8; 4] = [180, 50, 50, 255];
/// Farbe des gestrichelten Anker-Polygons (RGBA: Grau).
pub const GUIDE_LINE_COLOR: [u8; 4] = [200, 200, 200, 255];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_painter.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Hit-Test ────────────────────────────────────────────────
    /// Greif-Radius für Drag-Start
    pub grab_radius: f32,
    /// Lösch-Radius für Sekundärklick
    pub delete_radius: f32,
    /// Distanzmaß für die Anker-Suche
    pub hit_metric: DistanceMetric,

    // ── Overlays ────────────────────────────────────────────────
    /// Kontrollpunkte und Anker → Kontrollpunkt-Linien anzeigen
    pub show_control_handles: bool,
    /// Gestricheltes Polygon durch alle Anker anzeigen
    pub show_guide_lines: bool,

    // ── Kurve ───────────────────────────────────────────────────
    pub samples_per_segment: usize,
    pub curve_width_px: f32,
    pub curve_color: [u8; 4],

    // ── Anker & Kontrollpunkte ──────────────────────────────────
    pub anchor_radius_px: f32,
    pub anchor_color: [u8; 4],
    pub anchor_color_dragged: [u8; 4],
    pub control_point_radius_px: f32,
    pub control_point_color: [u8; 4],
    pub handle_line_color: [u8; 4],
    pub guide_line_color: [u8; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grab_radius: GRAB_RADIUS,
            delete_radius: DELETE_RADIUS,
            hit_metric: DistanceMetric::Manhattan,

            show_control_handles: true,
            show_guide_lines: true,

            samples_per_segment: SAMPLES_PER_SEGMENT,
            curve_width_px: CURVE_WIDTH_PX,
            curve_color: CURVE_COLOR,

            anchor_radius_px: ANCHOR_RADIUS_PX,
            anchor_color: ANCHOR_COLOR,
            anchor_color_dragged: ANCHOR_COLOR_DRAGGED,
            control_point_radius_px: CONTROL_POINT_RADIUS_PX,
            control_point_color: CONTROL_POINT_COLOR,
            handle_line_color: HANDLE_LINE_COLOR,
            guide_line_color: GUIDE_LINE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_painter"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_painter.toml")
    }
}

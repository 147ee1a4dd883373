//! Vordefinierte Anker-Listen zum schnellen Befüllen der Szene.

use glam::Vec2;

/// Eingebaute Form-Vorlagen. Alle schließen mit dem Startpunkt ab,
/// die Spline bleibt trotzdem offen (erster und letzter Anker fallen zusammen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Star,
    Triangle,
    House,
}

const STAR: [(f32, f32); 11] = [
    (200.0, 150.0),
    (250.0, 220.0),
    (320.0, 240.0),
    (260.0, 290.0),
    (280.0, 360.0),
    (200.0, 320.0),
    (120.0, 360.0),
    (140.0, 290.0),
    (80.0, 240.0),
    (150.0, 220.0),
    (200.0, 150.0),
];

const TRIANGLE: [(f32, f32); 4] = [(150.0, 400.0), (400.0, 400.0), (275.0, 150.0), (150.0, 400.0)];

const HOUSE: [(f32, f32); 6] = [
    (120.0, 400.0),
    (360.0, 400.0),
    (360.0, 260.0),
    (240.0, 160.0),
    (120.0, 260.0),
    (120.0, 400.0),
];

impl Preset {
    /// Alle Presets in Anzeige-Reihenfolge.
    pub const ALL: [Preset; 3] = [Preset::Star, Preset::Triangle, Preset::House];

    /// Anzeigename für Buttons.
    pub fn label(self) -> &'static str {
        match self {
            Preset::Star => "Stern",
            Preset::Triangle => "Dreieck",
            Preset::House => "Haus",
        }
    }

    /// Anker-Positionen des Presets.
    pub fn points(self) -> Vec<Vec2> {
        let raw: &[(f32, f32)] = match self {
            Preset::Star => &STAR,
            Preset::Triangle => &TRIANGLE,
            Preset::House => &HOUSE,
        };
        raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
    }
}

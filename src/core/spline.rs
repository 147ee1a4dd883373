//! Zusammengesetzte kubische Bézier-Spline durch alle Anker (C1-stetig).
//!
//! Aus Ankern und geschätzten Tangenten (`super::tangent`) werden pro Segment
//! zwei Kontrollpunkte abgeleitet (Hermite → Bézier mit Faktor 1/3).
//! Der Pfad wird bei jedem Aufruf komplett neu gebaut, nichts wird inkrementell
//! aktualisiert.

use super::tangent::estimate_tangents;
use glam::Vec2;

/// Hermite → Bézier: Kontrollpunkt liegt ein Drittel der Tangente vom Anker entfernt.
const HERMITE_TO_BEZIER: f32 = 1.0 / 3.0;

/// Kontrollpunkt-Paar (C1, C2) eines Segments `i` zwischen Anker `i` und `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPair {
    /// Erster Kontrollpunkt (nahe am Start-Anker)
    pub c1: Vec2,
    /// Zweiter Kontrollpunkt (nahe am End-Anker)
    pub c2: Vec2,
}

/// Ein kubisches Bézier-Segment: Start-Anker, zwei Kontrollpunkte, End-Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub start: Vec2,
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

impl BezierSegment {
    /// Erstellt ein Segment aus vier Punkten.
    pub const fn new(start: Vec2, c1: Vec2, c2: Vec2, end: Vec2) -> Self {
        Self { start, c1, c2, end }
    }

    /// Punkt auf dem Segment bei `t ∈ [0, 1]` (Bernstein-Form).
    pub fn point_at(&self, t: f32) -> Vec2 {
        let s = 1.0 - t;
        let a = s * s * s;
        let b = 3.0 * s * s * t;
        let c = 3.0 * s * t * t;
        let d = t * t * t;
        self.start * a + self.c1 * b + self.c2 * c + self.end * d
    }

    /// Erste Ableitung bei `t ∈ [0, 1]`.
    pub fn derivative_at(&self, t: f32) -> Vec2 {
        let s = 1.0 - t;
        3.0 * s * s * (self.c1 - self.start)
            + 6.0 * s * t * (self.c2 - self.c1)
            + 3.0 * t * t * (self.end - self.c2)
    }

    /// Ableitung am Startpunkt: `3 * (C1 - start)`.
    pub fn start_derivative(&self) -> Vec2 {
        3.0 * (self.c1 - self.start)
    }

    /// Ableitung am Endpunkt: `3 * (end - C2)`.
    pub fn end_derivative(&self) -> Vec2 {
        3.0 * (self.end - self.c2)
    }

    /// `samples + 1` gleichmäßig in `t` verteilte Punkte (inkl. beider Endpunkte).
    pub fn sample(&self, samples: usize) -> Vec<Vec2> {
        let samples = samples.max(1);
        (0..=samples)
            .map(|i| self.point_at(i as f32 / samples as f32))
            .collect()
    }
}

/// Fertig abgeleiteter Pfad: Anker-Snapshot, Tangenten und Kontrollpunkte.
///
/// Wird nie in-place verändert; jede Bearbeitung erzeugt einen neuen Pfad.
/// Invariante: `control_pairs.len() == anchors.len() - 1`, mindestens 2 Anker.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositePath {
    anchors: Vec<Vec2>,
    tangents: Vec<Vec2>,
    control_pairs: Vec<ControlPair>,
}

impl CompositePath {
    /// Anker-Snapshot, aus dem der Pfad gebaut wurde.
    pub fn anchors(&self) -> &[Vec2] {
        &self.anchors
    }

    /// Geschätzte Tangente pro Anker.
    pub fn tangents(&self) -> &[Vec2] {
        &self.tangents
    }

    /// Kontrollpunkt-Paare, eines pro Segment.
    pub fn control_pairs(&self) -> &[ControlPair] {
        &self.control_pairs
    }

    /// Anzahl der Segmente (`Anker - 1`).
    pub fn segment_count(&self) -> usize {
        self.control_pairs.len()
    }

    /// Segment `index`, oder `None` außerhalb des Bereichs.
    pub fn segment(&self, index: usize) -> Option<BezierSegment> {
        let pair = self.control_pairs.get(index)?;
        Some(BezierSegment::new(
            self.anchors[index],
            pair.c1,
            pair.c2,
            self.anchors[index + 1],
        ))
    }

    /// Iteriert über alle Segmente in Durchlaufreihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = BezierSegment> + '_ {
        self.control_pairs
            .iter()
            .zip(self.anchors.windows(2))
            .map(|(pair, ends)| BezierSegment::new(ends[0], pair.c1, pair.c2, ends[1]))
    }

    /// Punkt auf Segment `index` bei `t`.
    pub fn point_at(&self, index: usize, t: f32) -> Option<Vec2> {
        self.segment(index).map(|seg| seg.point_at(t))
    }

    /// Polyline durch alle Segmente für Renderer ohne Kubik-Primitive.
    ///
    /// Gemeinsame Endpunkte benachbarter Segmente erscheinen nur einmal:
    /// Ergebnislänge `segment_count * samples_per_segment + 1`.
    pub fn flatten(&self, samples_per_segment: usize) -> Vec<Vec2> {
        let samples = samples_per_segment.max(1);
        let mut points = Vec::with_capacity(self.segment_count() * samples + 1);
        for seg in self.segments() {
            for i in 0..samples {
                points.push(seg.point_at(i as f32 / samples as f32));
            }
        }
        if let Some(last) = self.anchors.last() {
            points.push(*last);
        }
        points
    }

    /// Hilfslinien Anker → Kontrollpunkt für das Debug-Overlay.
    ///
    /// Pro Segment zwei Linien: `(P[i], C1)` und `(P[i+1], C2)`.
    pub fn handle_lines(&self) -> Vec<(Vec2, Vec2)> {
        self.segments()
            .flat_map(|seg| [(seg.start, seg.c1), (seg.end, seg.c2)])
            .collect()
    }
}

/// Leitet die Kontrollpunkte aller Segmente aus Ankern und Tangenten ab.
///
/// `C1 = P[i] + T[i] / 3`, `C2 = P[i+1] - T[i+1] / 3`.
/// Erwartet `tangents.len() == anchors.len()`; überzählige Einträge werden ignoriert.
pub fn build_control_pairs(anchors: &[Vec2], tangents: &[Vec2]) -> Vec<ControlPair> {
    debug_assert_eq!(anchors.len(), tangents.len());
    anchors
        .windows(2)
        .zip(tangents.windows(2))
        .map(|(p, t)| ControlPair {
            c1: p[0] + t[0] * HERMITE_TO_BEZIER,
            c2: p[1] - t[1] * HERMITE_TO_BEZIER,
        })
        .collect()
}

/// Baut den kompletten Pfad neu auf.
///
/// Gibt `None` zurück, wenn weniger als 2 Anker existieren; das ist ein normaler,
/// darstellbarer Zustand (nur Anker, keine Kurve).
pub fn build_composite_path(anchors: &[Vec2]) -> Option<CompositePath> {
    if anchors.len() < 2 {
        return None;
    }
    let tangents = estimate_tangents(anchors);
    let control_pairs = build_control_pairs(anchors, &tangents);
    Some(CompositePath {
        anchors: anchors.to_vec(),
        tangents,
        control_pairs,
    })
}

//! Nächster-Anker-Abfrage für Greifen und Löschen.
//!
//! Lineare Suche über alle Anker; bei einigen Dutzend Punkten reicht das,
//! ein Spatial-Index wäre hier Overhead. Die Schwellwert-Entscheidung trifft
//! der Aufrufer über `HitMatch::within`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Distanzmaß für die Anker-Suche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// `|dx| + |dy|`
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)`
    Euclidean,
}

impl DistanceMetric {
    /// Distanz zwischen zwei Punkten nach diesem Maß.
    pub fn distance(self, a: Vec2, b: Vec2) -> f32 {
        let d = a - b;
        match self {
            DistanceMetric::Manhattan => d.x.abs() + d.y.abs(),
            DistanceMetric::Euclidean => d.length(),
        }
    }
}

/// Ergebnis einer Nächster-Anker-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitMatch {
    /// Index des gefundenen Ankers
    pub index: usize,
    /// Distanz zum Suchpunkt (im gewählten Maß)
    pub distance: f32,
}

impl HitMatch {
    /// Gibt `true` zurück, wenn der Treffer strikt innerhalb von `radius` liegt.
    pub fn within(&self, radius: f32) -> bool {
        self.distance < radius
    }
}

/// Findet den nächstgelegenen Anker zu `query`.
///
/// Bei gleicher Distanz gewinnt der kleinere Index. `None` nur bei leerer Sequenz.
pub fn find_nearest(anchors: &[Vec2], query: Vec2, metric: DistanceMetric) -> Option<HitMatch> {
    let mut best: Option<HitMatch> = None;
    for (index, anchor) in anchors.iter().enumerate() {
        let distance = metric.distance(*anchor, query);
        match best {
            Some(b) if b.distance <= distance => {}
            _ => best = Some(HitMatch { index, distance }),
        }
    }
    best
}

/// Kombiniert Suche und Schwellwert: Index des nächsten Ankers, falls innerhalb `radius`.
pub fn pick_within(
    anchors: &[Vec2],
    query: Vec2,
    metric: DistanceMetric,
    radius: f32,
) -> Option<usize> {
    find_nearest(anchors, query, metric)
        .filter(|hit| hit.within(radius))
        .map(|hit| hit.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_no_match() {
        assert!(find_nearest(&[], Vec2::ZERO, DistanceMetric::Manhattan).is_none());
    }

    #[test]
    fn test_single_anchor_always_matches() {
        let hit = find_nearest(
            &[Vec2::new(500.0, 500.0)],
            Vec2::ZERO,
            DistanceMetric::Euclidean,
        )
        .expect("Treffer erwartet");
        assert_eq!(hit.index, 0);
        assert!(!hit.within(10.0));
    }

    #[test]
    fn test_manhattan_distance() {
        let hit = find_nearest(
            &[Vec2::new(3.0, 4.0)],
            Vec2::ZERO,
            DistanceMetric::Manhattan,
        )
        .expect("Treffer erwartet");
        assert_eq!(hit.distance, 7.0);
    }

    #[test]
    fn test_euclidean_distance() {
        let hit = find_nearest(
            &[Vec2::new(3.0, 4.0)],
            Vec2::ZERO,
            DistanceMetric::Euclidean,
        )
        .expect("Treffer erwartet");
        assert_eq!(hit.distance, 5.0);
    }

    #[test]
    fn test_tie_prefers_lower_index() {
        let anchors = [Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(-5.0, 0.0)];
        let hit = find_nearest(&anchors, Vec2::ZERO, DistanceMetric::Manhattan)
            .expect("Treffer erwartet");
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_metrics_can_disagree() {
        // Manhattan: 8 gegen 8.5; Euklidisch: ≈ 6.32 gegen ≈ 6.01
        let anchors = [Vec2::new(6.0, 2.0), Vec2::new(4.25, 4.25)];
        let manhattan =
            find_nearest(&anchors, Vec2::ZERO, DistanceMetric::Manhattan).expect("Treffer");
        let euclidean =
            find_nearest(&anchors, Vec2::ZERO, DistanceMetric::Euclidean).expect("Treffer");
        assert_eq!(manhattan.index, 0);
        assert_eq!(euclidean.index, 1);
    }

    #[test]
    fn test_threshold_is_strict() {
        let anchors = [Vec2::new(10.0, 0.0)];
        assert_eq!(
            pick_within(&anchors, Vec2::ZERO, DistanceMetric::Manhattan, 10.0),
            None
        );
        assert_eq!(
            pick_within(&anchors, Vec2::new(0.5, 0.0), DistanceMetric::Manhattan, 10.0),
            Some(0)
        );
    }
}

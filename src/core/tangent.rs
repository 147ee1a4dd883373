//! Tangenten-Schätzung pro Anker (Catmull-Rom-artige zentrierte Differenzen).
//!
//! Reine Funktion der Anker-Sequenz: kein versteckter Zustand, wird nach jeder
//! strukturellen Änderung vollständig neu berechnet.

use glam::Vec2;

/// Berechnet für jeden Anker einen Tangentenvektor.
///
/// - `n == 2`: beide Tangenten sind `P[1] - P[0]` (gerades Segment)
/// - `n > 2`: innen `0.5 * (P[i+1] - P[i-1])`, an den Rändern einseitige Differenzen
///
/// Für `n < 2` wird ein leerer Vec zurückgegeben; der Aufrufer
/// (`build_composite_path`) bricht vorher ab.
pub fn estimate_tangents(anchors: &[Vec2]) -> Vec<Vec2> {
    let n = anchors.len();
    if n < 2 {
        return Vec::new();
    }
    if n == 2 {
        let chord = anchors[1] - anchors[0];
        return vec![chord, chord];
    }

    let mut tangents = Vec::with_capacity(n);
    tangents.push(anchors[1] - anchors[0]);
    for window in anchors.windows(3) {
        tangents.push((window[2] - window[0]) * 0.5);
    }
    tangents.push(anchors[n - 1] - anchors[n - 2]);
    tangents
}

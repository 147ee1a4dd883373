use approx::assert_abs_diff_eq;
use glam::Vec2;
use spline_painter::{
    build_composite_path, estimate_tangents, find_nearest, DistanceMetric, PointStore, Preset,
};

fn irregular_anchors() -> Vec<Vec2> {
    vec![
        Vec2::new(12.0, 300.0),
        Vec2::new(80.5, 40.0),
        Vec2::new(81.0, 44.0),
        Vec2::new(400.0, 120.0),
        Vec2::new(-35.0, 210.0),
        Vec2::new(640.0, 480.0),
    ]
}

fn all_anchor_sets() -> Vec<Vec<Vec2>> {
    let mut sets: Vec<Vec<Vec2>> = Preset::ALL.iter().map(|p| p.points()).collect();
    sets.push(irregular_anchors());
    sets
}

#[test]
fn test_segments_meet_with_matching_derivatives() {
    for anchors in all_anchor_sets() {
        let path = build_composite_path(&anchors).expect("mindestens 2 Anker");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), anchors.len() - 1);

        for pair in segments.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            assert_eq!(left.end, right.start);
            let d_left = left.end_derivative();
            let d_right = right.start_derivative();
            assert_abs_diff_eq!(d_left.x, d_right.x, epsilon = 1e-2);
            assert_abs_diff_eq!(d_left.y, d_right.y, epsilon = 1e-2);
        }
    }
}

#[test]
fn test_curve_passes_through_every_anchor() {
    for anchors in all_anchor_sets() {
        let path = build_composite_path(&anchors).expect("Pfad erwartet");
        for (i, seg) in path.segments().enumerate() {
            assert_eq!(seg.point_at(0.0), anchors[i]);
            let end = seg.point_at(1.0);
            assert_abs_diff_eq!(end.x, anchors[i + 1].x, epsilon = 1e-3);
            assert_abs_diff_eq!(end.y, anchors[i + 1].y, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_rebuild_without_change_is_identical() {
    let anchors = irregular_anchors();
    let first = build_composite_path(&anchors).expect("Pfad erwartet");
    let second = build_composite_path(&anchors).expect("Pfad erwartet");
    assert_eq!(first, second);
    assert_eq!(estimate_tangents(&anchors), first.tangents());
}

#[test]
fn test_deleted_index_is_never_returned() {
    let mut store = PointStore::from_points(irregular_anchors());
    let removed = store.delete(2).expect("Index 2 existiert");
    assert_eq!(store.len(), 5);

    for metric in [DistanceMetric::Manhattan, DistanceMetric::Euclidean] {
        let hit = find_nearest(store.get_all(), removed, metric).expect("Anker vorhanden");
        assert!(hit.index < store.len());
        // (80.5, 40) rückt nicht nach, Index 1 ist der nächstgelegene
        assert_eq!(hit.index, 1);
    }
}

#[test]
fn test_tie_resolves_to_lowest_index() {
    let anchors = [Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0)];
    let hit = find_nearest(&anchors, Vec2::ZERO, DistanceMetric::Manhattan).expect("Treffer");
    assert_eq!(hit.index, 0);
    assert_eq!(hit.distance, 5.0);
}

#[test]
fn test_single_anchor_has_no_path() {
    assert!(build_composite_path(&[Vec2::new(1.0, 1.0)]).is_none());
    assert!(build_composite_path(&[]).is_none());
}

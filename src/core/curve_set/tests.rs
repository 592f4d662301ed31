use super::*;
use crate::core::{
    AxisMask, PointState, SegmentKind, ShiftDirection, ShiftMode, SnapDirection, MERGE_EPSILON,
};
use approx::assert_abs_diff_eq;

fn line(x: f32, y: f32) -> CurvePoint {
    CurvePoint::new(Vec2::new(x, y), SegmentKind::Line)
}

fn curve_with_xs(xs: &[f32]) -> CurveSet {
    let mut curve = CurveSet::new();
    for &x in xs {
        curve.insert(line(x, x * 2.0));
    }
    curve
}

fn xs(curve: &CurveSet) -> Vec<f32> {
    curve.iter().map(|p| p.position.x).collect()
}

fn selected_indices(curve: &CurveSet) -> Vec<usize> {
    curve
        .iter()
        .enumerate()
        .filter(|(_, p)| p.selected_primary)
        .map(|(i, _)| i)
        .collect()
}

fn select_only(curve: &mut CurveSet, indices: &[usize]) {
    curve.deselect_all();
    for &i in indices {
        let x = curve.points()[i].position.x;
        let y = curve.points()[i].position.y;
        curve.hit_test(Vec2::new(x, y), 0.001);
    }
    // Kontrollpunkte sollen in diesen Tests nicht mitwandern
    for point in &mut curve.points {
        point.selected_secondary = false;
    }
}

// ─── insert ──────────────────────────────────────────────────────────────────

#[test]
fn test_insert_keeps_ascending_order() {
    let curve = curve_with_xs(&[5.0, 1.0, 3.0, -2.0, 4.0]);
    assert_eq!(xs(&curve), vec![-2.0, 1.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_insert_returns_resulting_index() {
    let mut curve = curve_with_xs(&[0.0, 2.0]);
    assert_eq!(curve.insert(line(1.0, 0.0)), 1);
    assert_eq!(curve.insert(line(10.0, 0.0)), 3);
    assert_eq!(curve.insert(line(-1.0, 0.0)), 0);
    assert_eq!(curve.insert(line(2.004, 9.0)), 3);
}

#[test]
fn test_insert_merges_within_epsilon() {
    let mut curve = CurveSet::new();
    curve.insert(line(1.0, 5.0));
    curve.insert(line(1.005, 9.0));

    assert_eq!(curve.point_count(), 1);
    assert_eq!(curve.points()[0].position.y, 9.0);
    assert_eq!(curve.points()[0].position.x, 1.005);
}

#[test]
fn test_insert_merge_keeps_touch_state() {
    let mut curve = curve_with_xs(&[0.0, 1.0]);
    curve.hit_test(Vec2::new(1.0, 2.0), 0.001);
    assert!(curve.points()[1].selected_primary);

    curve.insert(line(1.002, 7.0));
    assert_eq!(curve.point_count(), 2);
    assert!(curve.points()[1].selected_primary);
    assert_eq!(curve.points()[1].position.y, 7.0);
}

#[test]
fn test_insert_merge_absorbs_second_collision() {
    let mut curve = CurveSet::new();
    curve.insert(line(1.0, 0.0));
    curve.insert(line(1.015, 0.0));
    assert_eq!(curve.point_count(), 2);

    // 1.008 liegt nahe an beiden Punkten
    curve.insert(line(1.008, 3.0));
    assert_eq!(curve.point_count(), 1);
    assert_eq!(curve.points()[0].position, Vec2::new(1.008, 3.0));
}

#[test]
fn test_insert_spacing_invariant_for_dense_inputs() {
    let mut curve = CurveSet::new();
    for i in 0..200 {
        // Pseudo-zufällige, teils kollidierende x-Werte
        let x = ((i * 37) % 101) as f32 * 0.007;
        curve.insert(line(x, i as f32));
    }
    for w in curve.points().windows(2) {
        assert!(w[0].position.x < w[1].position.x);
        assert!(w[1].position.x - w[0].position.x > MERGE_EPSILON);
    }
}

#[test]
fn test_insert_defaults_control_to_midpoint() {
    let mut curve = CurveSet::new();
    curve.insert(CurvePoint::new(Vec2::new(0.0, 0.0), SegmentKind::Curve));
    curve.insert(CurvePoint::new(Vec2::new(2.0, 0.0), SegmentKind::Curve));

    assert_eq!(curve.points()[0].control, Vec2::new(0.0, 0.0));
    assert_eq!(curve.points()[1].control, Vec2::new(1.0, 0.0));
}

#[test]
fn test_insert_keeps_explicit_control() {
    let mut curve = CurveSet::new();
    curve.insert(line(0.0, 0.0));
    curve.insert(
        CurvePoint::new(Vec2::new(2.0, 0.0), SegmentKind::Curve).with_control(Vec2::new(5.0, 5.0)),
    );
    assert_eq!(curve.points()[1].control, Vec2::new(5.0, 5.0));
}

#[test]
fn test_insert_first_point_keeps_mirrored_control() {
    let mut curve = curve_with_xs(&[2.0]);
    curve.insert(line(1.0, 4.0));
    assert_eq!(curve.points()[0].control, Vec2::new(1.0, 4.0));
}

// ─── delete ──────────────────────────────────────────────────────────────────

#[test]
fn test_delete_selected_handles_consecutive_selection() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    select_only(&mut curve, &[1, 2, 3]);

    assert_eq!(curve.delete_selected(), 3);
    assert_eq!(xs(&curve), vec![0.0, 4.0]);
}

#[test]
fn test_delete_on_empty_store_is_noop() {
    let mut curve = CurveSet::new();
    assert_eq!(curve.delete_selected(), 0);
    assert!(curve.is_empty());
}

#[test]
fn test_clear_removes_everything_and_keeps_last_stats() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0]);
    let stats = curve.aggregate();
    assert_eq!(curve.clear(), 3);
    assert_eq!(curve.point_count(), 0);
    assert_eq!(curve.aggregate(), stats);
}

// ─── Aggregate ───────────────────────────────────────────────────────────────

#[test]
fn test_aggregate_tracks_mutations() {
    let mut curve = CurveSet::new();
    for (i, y) in [3.0, -1.0, 4.0, 1.0, 5.0].into_iter().enumerate() {
        curve.insert(line(i as f32, y));
    }
    assert_eq!(curve.min_y(), -1.0);
    assert_eq!(curve.max_y(), 5.0);
    assert_abs_diff_eq!(curve.average_y(), 2.4, epsilon = 1e-6);

    // Punkt mit y=5 löschen
    select_only(&mut curve, &[4]);
    curve.delete_selected();
    assert_eq!(curve.max_y(), 4.0);
    assert_abs_diff_eq!(curve.average_y(), 1.75, epsilon = 1e-6);
}

#[test]
fn test_span_and_counts() {
    let mut curve = CurveSet::new();
    assert_eq!(curve.span(), 0.0);
    curve.insert(line(1.5, 0.0));
    assert_eq!(curve.span(), 0.0);
    curve.insert(line(4.0, 0.0));
    assert_eq!(curve.span(), 2.5);

    curve.select_all();
    assert_eq!(curve.selected_count(), 4);
    assert_eq!(curve.dragging_count(), 0);
}

// ─── Selektion ───────────────────────────────────────────────────────────────

#[test]
fn test_hit_test_marks_anchor_and_control_separately() {
    let mut curve = CurveSet::new();
    curve.insert(line(0.0, 0.0));
    curve.insert(line(2.0, 2.0)); // control = (1, 1)

    assert_eq!(curve.hit_test(Vec2::new(1.0, 1.02), 0.05), 1);
    let p = &curve.points()[1];
    assert!(!p.selected_primary);
    assert!(p.selected_secondary);
}

#[test]
fn test_hit_test_rect_accepts_any_corner_order() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0, 3.0]);
    curve.deselect_all();
    // Anker liegen auf y = 2x; Rechteck deckt x ∈ [0.5, 2.5], y ∈ [0, 6] ab
    let hits = curve.hit_test_rect(Vec2::new(2.5, 0.0), Vec2::new(0.5, 6.0));
    assert!(hits >= 2);
    assert_eq!(selected_indices(&curve), vec![1, 2]);
}

#[test]
fn test_hit_test_is_additive() {
    let mut curve = curve_with_xs(&[0.0, 5.0]);
    curve.hit_test(Vec2::new(0.0, 0.0), 0.01);
    curve.hit_test(Vec2::new(5.0, 10.0), 0.01);
    assert_eq!(selected_indices(&curve), vec![0, 1]);
}

#[test]
fn test_find_nearest_selects_exactly_one() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0]);
    curve.select_all();

    assert_eq!(curve.find_nearest(Vec2::new(1.9, 3.5)), Some(2));
    assert_eq!(selected_indices(&curve), vec![2]);
}

#[test]
fn test_find_nearest_tie_prefers_first() {
    let mut curve = CurveSet::new();
    curve.insert(line(0.0, 0.0));
    curve.insert(line(2.0, 0.0));
    assert_eq!(curve.find_nearest(Vec2::new(1.0, 0.0)), Some(0));
}

#[test]
fn test_find_nearest_on_empty_store() {
    let mut curve = CurveSet::new();
    assert_eq!(curve.find_nearest(Vec2::ZERO), None);
}

#[test]
fn test_select_all_drops_drag_and_deselect_clears_everything() {
    let mut curve = curve_with_xs(&[0.0, 1.0]);
    curve.select_all();
    curve.begin_drag();
    assert_eq!(curve.points()[0].state(), PointState::Dragging);

    curve.select_all();
    assert_eq!(curve.dragging_count(), 0);
    assert_eq!(curve.points()[0].state(), PointState::Selected);

    curve.deselect_all();
    assert!(curve.iter().all(|p| p.state() == PointState::Idle));
}

// ─── Drag-Lebenszyklus ───────────────────────────────────────────────────────

#[test]
fn test_drag_lifecycle_with_and_without_modifier() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0]);
    curve.find_nearest(Vec2::new(1.0, 2.0));
    assert_eq!(curve.begin_drag(), 1);
    assert_eq!(curve.points()[1].state(), PointState::Dragging);

    curve.end_drag(true);
    assert_eq!(curve.points()[1].state(), PointState::Selected);

    curve.begin_drag();
    curve.end_drag(false);
    assert_eq!(curve.points()[1].state(), PointState::Idle);
}

#[test]
fn test_translate_dragged_respects_axis_mask_for_anchor_only() {
    let mut curve = CurveSet::new();
    curve.insert(line(0.0, 0.0));
    curve.insert(line(2.0, 2.0)); // control = (1, 1)
    curve.select_all();
    curve.begin_drag();

    let moved = curve.translate_dragged(Vec2::new(0.5, 1.0), AxisMask::Y);
    assert_eq!(moved, 4);
    assert_eq!(curve.points()[1].position, Vec2::new(2.0, 3.0));
    assert_eq!(curve.points()[1].control, Vec2::new(1.5, 2.0));
    assert_eq!(curve.max_y(), 3.0);
}

#[test]
fn test_translate_dragged_ignores_merely_selected_points() {
    let mut curve = curve_with_xs(&[0.0, 1.0]);
    curve.select_all();
    assert_eq!(curve.translate_dragged(Vec2::new(0.0, 1.0), AxisMask::XY), 0);
    assert_eq!(curve.points()[0].position, Vec2::new(0.0, 0.0));
}

#[test]
fn test_translate_selected_restores_order_after_crossing() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0]);
    select_only(&mut curve, &[0]);

    curve.translate_selected(Vec2::new(1.5, 0.0), AxisMask::X);
    assert_eq!(xs(&curve), vec![1.0, 1.5, 2.0]);
    // Selektion wandert mit dem Punkt
    assert_eq!(selected_indices(&curve), vec![1]);
}

#[test]
fn test_translate_onto_neighbor_merges_and_keeps_moved_point() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0]);
    select_only(&mut curve, &[0]);

    curve.translate_selected(Vec2::new(1.005, 0.0), AxisMask::X);
    assert_eq!(xs(&curve), vec![1.005, 2.0]);
    assert_eq!(curve.points()[0].position.y, 0.0);
    assert_eq!(selected_indices(&curve), vec![0]);
    assert_eq!(curve.max_y(), 4.0);
}

#[test]
fn test_drag_past_neighbor_merges_and_keeps_dragged_point() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 3.0]);
    select_only(&mut curve, &[2]);
    curve.begin_drag();

    curve.translate_dragged(Vec2::new(-2.004, 0.0), AxisMask::XY);
    assert_eq!(curve.point_count(), 2);
    assert_abs_diff_eq!(curve.points()[1].position.x, 0.996, epsilon = 1e-5);
    assert_eq!(curve.points()[1].position.y, 6.0);
    assert_eq!(curve.points()[1].state(), PointState::Dragging);
    assert_eq!(curve.dragging_count(), 1);
}

// ─── Snap ────────────────────────────────────────────────────────────────────

#[test]
fn test_snap_rounds_selected_anchors() {
    let mut curve = CurveSet::new();
    curve.insert(line(0.4, 1.3));
    curve.insert(line(2.6, -0.7));
    curve.select_all();

    assert_eq!(curve.snap(SnapDirection::Ceil, AxisMask::Y), 2);
    assert_eq!(curve.points()[0].position, Vec2::new(0.4, 2.0));
    assert_eq!(curve.points()[1].position, Vec2::new(2.6, -0.0));
    assert_eq!(curve.min_y(), 0.0);

    assert_eq!(curve.snap(SnapDirection::Floor, AxisMask::XY), 2);
    assert_eq!(xs(&curve), vec![0.0, 2.0]);
}

#[test]
fn test_snap_collision_keeps_spacing() {
    let mut curve = curve_with_xs(&[1.3, 1.7, 3.0]);
    select_only(&mut curve, &[0, 1]);

    assert_eq!(curve.snap(SnapDirection::Floor, AxisMask::X), 2);
    assert_eq!(xs(&curve), vec![1.0, 3.0]);
    // Beide bewegt: der spätere Punkt gewinnt
    assert_eq!(curve.points()[0].position.y, 3.4);
    for pair in curve.points().windows(2) {
        assert!(pair[1].position.x - pair[0].position.x > MERGE_EPSILON);
    }
}

#[test]
fn test_snap_without_selection_is_noop() {
    let mut curve = curve_with_xs(&[0.5]);
    assert_eq!(curve.snap(SnapDirection::Floor, AxisMask::XY), 0);
    assert_eq!(curve.points()[0].position, Vec2::new(0.5, 1.0));
}

// ─── shift_selection ─────────────────────────────────────────────────────────

#[test]
fn test_shift_move_left_at_boundary_is_noop() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0]);
    select_only(&mut curve, &[0]);
    curve.shift_selection(ShiftDirection::Left, ShiftMode::Move);
    assert_eq!(selected_indices(&curve), vec![0]);
}

#[test]
fn test_shift_move_right_at_boundary_is_noop() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0]);
    select_only(&mut curve, &[2]);
    curve.shift_selection(ShiftDirection::Right, ShiftMode::Move);
    assert_eq!(selected_indices(&curve), vec![2]);
}

#[test]
fn test_shift_move_slides_block() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    select_only(&mut curve, &[1, 2]);

    curve.shift_selection(ShiftDirection::Left, ShiftMode::Move);
    assert_eq!(selected_indices(&curve), vec![0, 1]);

    curve.shift_selection(ShiftDirection::Right, ShiftMode::Move);
    curve.shift_selection(ShiftDirection::Right, ShiftMode::Move);
    assert_eq!(selected_indices(&curve), vec![2, 3]);
}

#[test]
fn test_shift_extend_adds_neighbor() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0, 3.0]);
    select_only(&mut curve, &[2]);

    curve.shift_selection(ShiftDirection::Left, ShiftMode::Extend);
    assert_eq!(selected_indices(&curve), vec![1, 2]);

    curve.shift_selection(ShiftDirection::Right, ShiftMode::Extend);
    assert_eq!(selected_indices(&curve), vec![1, 2, 3]);
}

#[test]
fn test_shift_collapse_keeps_first_from_direction() {
    let mut curve = curve_with_xs(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    select_only(&mut curve, &[1, 3, 4]);
    curve.shift_selection(ShiftDirection::Left, ShiftMode::Collapse);
    assert_eq!(selected_indices(&curve), vec![1]);

    select_only(&mut curve, &[1, 3, 4]);
    curve.shift_selection(ShiftDirection::Right, ShiftMode::Collapse);
    assert_eq!(selected_indices(&curve), vec![4]);
}

#[test]
fn test_shift_on_empty_store_is_noop() {
    let mut curve = CurveSet::new();
    curve.shift_selection(ShiftDirection::Right, ShiftMode::Extend);
    assert!(curve.is_empty());
}

// ─── Auswertung & Snapshot ───────────────────────────────────────────────────

#[test]
fn test_value_at_through_store() {
    let mut curve = CurveSet::new();
    assert_eq!(curve.value_at(1.0), 0.0);

    curve.insert(line(0.0, 0.0));
    assert_eq!(curve.value_at(42.0), 0.0);

    curve.insert(line(4.0, 8.0));
    // t läuft vom rechten Anker rückwärts: x = 1 → t = 0.75
    assert_abs_diff_eq!(curve.value_at(1.0), 6.0, epsilon = 1e-6);
    assert_abs_diff_eq!(curve.value_at(3.0), 2.0, epsilon = 1e-6);
    assert_eq!(curve.value_at(4.0), 8.0);
}

#[test]
fn test_segment_access_is_bounds_checked() {
    let curve = curve_with_xs(&[0.0, 1.0]);
    assert_eq!(curve.evaluate_segment(0, 0.0), Some(Vec2::new(0.0, 0.0)));
    assert!(curve.evaluate_segment(1, 0.5).is_none());
    assert_eq!(curve.sample_segment(0, 40).map(|s| s.len()), Some(2));
    assert!(curve.sample_segment(5, 40).is_none());
    assert_eq!(curve.segments().count(), 1);
}

#[test]
fn test_snapshot_roundtrip_preserves_controls() {
    let mut curve = CurveSet::new();
    curve.insert(line(0.0, 1.0));
    curve.insert(
        CurvePoint::new(Vec2::new(3.0, 2.0), SegmentKind::Curve).with_control(Vec2::new(2.0, 5.0)),
    );

    let snapshot = curve.snapshot();
    let mut mirror = CurveSet::new();
    mirror.replace_from_snapshot(&snapshot);

    assert_eq!(mirror.points(), curve.points());
    assert_eq!(mirror.aggregate(), curve.aggregate());
}

#[test]
fn test_replace_from_snapshot_resorts_and_merges() {
    use crate::sync::{CurveSnapshot, PointRecord};

    let record = |x: f32, y: f32| PointRecord {
        segment_kind: SegmentKind::Line,
        position: [x, y],
        control: [x, y],
    };
    let snapshot = CurveSnapshot {
        points: vec![record(3.0, 1.0), record(1.0, 2.0), record(1.004, 9.0)],
    };

    let mut curve = curve_with_xs(&[10.0, 20.0]);
    curve.select_all();
    curve.replace_from_snapshot(&snapshot);

    assert_eq!(xs(&curve), vec![1.004, 3.0]);
    assert_eq!(curve.points()[0].position.y, 9.0);
    assert_eq!(curve.selected_count(), 0);
    assert_eq!(curve.max_y(), 9.0);
}

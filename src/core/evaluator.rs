//! Reine Auswertungsfunktionen für die stückweise definierte Kurve.
//!
//! Layer-neutral: arbeitet nur auf Slices von `CurvePoint`, ohne Zugriff
//! auf Selektion oder Store-Interna.

use super::point::{CurvePoint, SegmentKind};
use glam::Vec2;

/// Minimum, Maximum und Mittelwert aller y-Werte
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveStats {
    /// Kleinster y-Wert
    pub min: f32,
    /// Größter y-Wert
    pub max: f32,
    /// Arithmetisches Mittel der y-Werte
    pub average: f32,
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Position auf dem Segment von `point` nach `next` beim Parameter `t`.
///
/// - `Flat`: `(next.x, point.y)`, unabhängig von `t`
/// - `Line`: lineare Interpolation der Anker
/// - `Curve`: kubische Bézier-Kurve, deren beide inneren Handles der eine
///   gespeicherte `control` von `point` sind
///
/// `t` wird nicht geklemmt.
pub fn evaluate(t: f32, point: &CurvePoint, next: &CurvePoint) -> Vec2 {
    match point.kind {
        SegmentKind::Flat => Vec2::new(next.position.x, point.position.y),
        // Gewichtete Form hält t = 0 und t = 1 bitgenau auf den Ankern
        SegmentKind::Line => point.position * (1.0 - t) + next.position * t,
        SegmentKind::Curve => cubic_bezier(
            point.position,
            point.control,
            point.control,
            next.position,
            t,
        ),
    }
}

/// Kurvenwert bei `x`.
///
/// Liegt `x` innerhalb `MERGE_EPSILON` an einem Anker, wird dessen y geliefert.
/// Sonst wird das umschließende Segment interpoliert, mit `t` rückwärts vom
/// rechten Anker gemessen: `t = (x - rechts.x) / (links.x - rechts.x)`.
/// Nahe dem linken Anker liegt `t` also bei 1. Außerhalb des definierten
/// Bereichs und bei leerer Kurve: 0. Ein einzelner Punkt liefert sein y für jedes `x`.
pub fn value_at(points: &[CurvePoint], x: f32) -> f32 {
    match points {
        [] => return 0.0,
        [only] => return only.position.y,
        _ => {}
    }

    for (i, point) in points.iter().enumerate() {
        if point.merges_with(x) {
            return point.position.y;
        }
        if i > 0 {
            let left = &points[i - 1];
            if left.position.x < x && x < point.position.x {
                let t = (x - point.position.x) / (left.position.x - point.position.x);
                return evaluate(t, left, point).y;
            }
        }
    }
    0.0
}

/// Aggregat über alle y-Werte in einem Durchlauf. `None` bei leerer Kurve.
pub fn aggregate(points: &[CurvePoint]) -> Option<CurveStats> {
    if points.is_empty() {
        return None;
    }

    let mut min = f32::MAX;
    let mut max = -f32::MAX;
    let mut sum = 0.0f32;
    for point in points {
        let y = point.position.y;
        min = min.min(y);
        max = max.max(y);
        sum += y;
    }

    Some(CurveStats {
        min,
        max,
        average: sum / points.len() as f32,
    })
}

/// Polylinie eines Segments für die Darstellung.
///
/// `Flat` liefert die Stufe über die Ecke `(next.x, point.y)`, `Line` nur die
/// beiden Anker, `Curve` `steps + 1` gleichmäßige Parameter-Samples.
pub fn sample_segment(point: &CurvePoint, next: &CurvePoint, steps: usize) -> Vec<Vec2> {
    match point.kind {
        SegmentKind::Flat => vec![
            point.position,
            evaluate(0.0, point, next),
            next.position,
        ],
        SegmentKind::Line => vec![point.position, next.position],
        SegmentKind::Curve => {
            let steps = steps.max(1);
            (0..=steps)
                .map(|i| evaluate(i as f32 / steps as f32, point, next))
                .collect()
        }
    }
}

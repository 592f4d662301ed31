//! Core-Domänentypen: Kurvenpunkte, CurveSet und Auswertung.

pub mod curve_set;
pub mod evaluator;
/// Core-Datenmodell der Kurve
///
/// - CurvePoint: Kontrollpunkt mit Segment-Typ, Anker und Kontrollpunkt
/// - CurveSet: geordnete Punktfolge mit Aggregaten
pub mod point;

pub use curve_set::CurveSet;
pub use evaluator::CurveStats;
pub use point::{
    AxisMask, CurvePoint, PointState, SegmentKind, ShiftDirection, ShiftMode, SnapDirection,
    MERGE_EPSILON,
};

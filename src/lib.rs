//! Kurven-Editor-Kern.
//! Punktverwaltung, Touch/Drag-Selektion und stückweise Auswertung als Library.

pub mod app;
pub mod core;
pub mod shared;
pub mod sync;

pub use app::{CommandLog, CurveCommand, EditSession};
pub use core::{
    AxisMask, CurvePoint, CurveSet, CurveStats, PointState, SegmentKind, ShiftDirection,
    ShiftMode, SnapDirection, MERGE_EPSILON,
};
pub use shared::CurveOptions;
pub use sync::{CurveSnapshot, PointRecord, SyncClient};

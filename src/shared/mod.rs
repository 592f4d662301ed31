//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die zwischen `core`-Aufrufern und `app`
//! geteilt wird.

pub mod options;

pub use options::CurveOptions;
pub use options::{CURVE_SAMPLES, PICK_RADIUS_PX};

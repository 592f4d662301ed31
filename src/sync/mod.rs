//! Sync-Grenze: Wire-Format der Punktfolge und injizierbarer Sync-Client.
//!
//! - `snapshot` — serialisierbare Datensätze (JSON) inkl. Validierung
//! - `client` — Trait für den Transport zum entfernten Betrachter

mod client;
mod snapshot;

pub use client::SyncClient;
pub use snapshot::{CurveSnapshot, PointRecord};

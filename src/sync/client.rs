//! Injizierbarer Transport zum entfernten Betrachter.

use super::CurveSnapshot;

/// Transport für die Spiegelung der Kurve.
///
/// Wird beim Erstellen der Session übergeben; es gibt keinen globalen Zustand.
/// Implementierungen übernehmen Verbindung und Framing selbst.
pub trait SyncClient {
    /// Sendet den aktuellen Zustand an die Gegenseite.
    fn publish(&mut self, snapshot: &CurveSnapshot) -> anyhow::Result<()>;

    /// Liefert einen empfangenen Snapshot, falls einer ansteht (nicht blockierend).
    fn try_receive(&mut self) -> Option<CurveSnapshot>;
}

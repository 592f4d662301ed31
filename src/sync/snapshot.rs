//! Wire-Format: geordnete Liste von `{segment_kind, position, control}`-Datensätzen.

use crate::core::SegmentKind;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Ein Kurvenpunkt auf der Leitung
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Segment-Typ als Zahl (0 = Flat, 1 = Line, 2 = Curve)
    #[serde(alias = "type")]
    pub segment_kind: SegmentKind,
    /// Anker `[x, y]`
    #[serde(alias = "pos")]
    pub position: [f32; 2],
    /// Kontrollpunkt `[x, y]`
    #[serde(alias = "pos2")]
    pub control: [f32; 2],
}

impl PointRecord {
    fn is_finite(&self) -> bool {
        self.position
            .iter()
            .chain(self.control.iter())
            .all(|v| v.is_finite())
    }
}

/// Vollständiger Zustand einer Kurve für die Synchronisation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveSnapshot {
    /// Punkte in Sende-Reihenfolge
    pub points: Vec<PointRecord>,
}

impl CurveSnapshot {
    /// Serialisiert den Snapshot als kompaktes JSON-Array.
    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        serde_json::to_string(self).context("Snapshot konnte nicht serialisiert werden")
    }

    /// Liest einen Snapshot aus JSON und verwirft nicht-endliche Koordinaten.
    pub fn from_json(data: &str) -> Result<Self> {
        let snapshot: CurveSnapshot =
            serde_json::from_str(data).context("Snapshot-JSON ist ungültig")?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Prüft alle Datensätze auf endliche Koordinaten.
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            bail!("Datensatz {index} enthält nicht-endliche Koordinaten");
        }
        Ok(())
    }

    /// Gibt die Anzahl der Datensätze zurück
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Datensätze vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Übergabe der Punktfolge an den Sync-Kollaborateur.

use super::CurveSet;
use crate::core::point::CurvePoint;
use crate::sync::{CurveSnapshot, PointRecord};
use glam::Vec2;

impl CurveSet {
    /// Erstellt einen Snapshot der Punktfolge in x-Reihenfolge.
    pub fn snapshot(&self) -> CurveSnapshot {
        CurveSnapshot {
            points: self
                .points
                .iter()
                .map(|p| PointRecord {
                    segment_kind: p.kind,
                    position: p.position.to_array(),
                    control: p.control.to_array(),
                })
                .collect(),
        }
    }

    /// Ersetzt die Kurve vollständig durch einen empfangenen Snapshot.
    ///
    /// Die Reihenfolge auf der Leitung wird nicht übernommen, sondern neu sortiert.
    pub fn replace_from_snapshot(&mut self, snapshot: &CurveSnapshot) {
        let points = snapshot
            .points
            .iter()
            .map(|record| {
                CurvePoint::new(Vec2::from_array(record.position), record.segment_kind)
                    .with_control(Vec2::from_array(record.control))
            })
            .collect();
        self.replace_points(points);
        log::info!(
            "Snapshot übernommen: {} Datensätze, {} Punkte",
            snapshot.points.len(),
            self.points.len()
        );
    }
}

//! Die zentrale CurveSet-Datenstruktur: nach x geordnete Punkte plus Aggregate.

mod selection;
mod snapshot;
mod transform;

use super::evaluator::{self, CurveStats};
use super::point::CurvePoint;
use glam::Vec2;

/// Container für alle Kontrollpunkte einer Kurve
///
/// Die Punkte sind stets aufsteigend nach `position.x` sortiert. Es gibt keine
/// veränderlichen Referenzen nach außen; jede Mutation läuft über Methoden,
/// die Sortierung und Aggregate nachziehen.
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    points: Vec<CurvePoint>,
    stats: CurveStats,
}

impl CurveSet {
    /// Erstellt eine leere Kurve
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Punkt ein oder ersetzt den Punkt mit (innerhalb `MERGE_EPSILON`) gleichem x.
    ///
    /// Beim Ersetzen bleiben Touch/Drag-Flags des bestehenden Punkts erhalten;
    /// weitere Punkte, die nach dem Ersetzen zu nah liegen, werden aufgenommen.
    /// Ohne expliziten Kontrollpunkt erhält jeder Nicht-erste Punkt den
    /// Mittelpunkt zwischen sich und seinem Vorgänger.
    ///
    /// Gibt den resultierenden Index zurück.
    pub fn insert(&mut self, point: CurvePoint) -> usize {
        let x = point.position.x;
        let mut index = self.points.len();
        let mut merged = false;

        for (i, existing) in self.points.iter().enumerate() {
            if existing.merges_with(x) {
                index = i;
                merged = true;
                break;
            }
            if existing.position.x > x {
                index = i;
                break;
            }
        }

        if merged {
            self.points[index].assign_geometry(&point);
            let absorbed = self.absorb_neighbors(index);
            if absorbed > 0 {
                log::debug!("{absorbed} Nachbarpunkt(e) bei x={x} zusammengeführt");
            }
        } else {
            self.points.insert(index, point);
        }

        if index > 0 && !point.has_explicit_control() {
            let previous = self.points[index - 1].position;
            let current = &mut self.points[index];
            current.control = (current.position + previous) / 2.0;
        }

        log::debug!(
            "Punkt {} bei Index {index} (x={x}, {} Punkte)",
            if merged { "ersetzt" } else { "eingefügt" },
            self.points.len()
        );
        self.update_stats();
        index
    }

    /// Entfernt Punkte rechts von `index`, die nach einem Merge zu nah liegen.
    fn absorb_neighbors(&mut self, index: usize) -> usize {
        let x = self.points[index].position.x;
        let before = self.points.len();
        let mut i = 0;
        self.points.retain(|p| {
            let keep = i == index || !p.merges_with(x);
            i += 1;
            keep
        });
        before - self.points.len()
    }

    /// Entfernt alle Punkte mit selektiertem Anker in einem Durchlauf.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.points.len();
        self.points.retain(|p| !p.selected_primary);
        let removed = before - self.points.len();
        if removed > 0 {
            log::debug!("{removed} Punkt(e) gelöscht");
        }
        self.update_stats();
        removed
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) -> usize {
        self.select_all();
        self.delete_selected()
    }

    /// Ersetzt die Punktfolge komplett, sortiert nach x und führt Kollisionen zusammen.
    ///
    /// Bei Kollisionen gewinnt der spätere Punkt. Touch/Drag-Zustand wird verworfen.
    pub fn replace_points(&mut self, mut points: Vec<CurvePoint>) {
        points.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        let mut merged: Vec<CurvePoint> = Vec::with_capacity(points.len());
        for mut point in points {
            point.clear_flags();
            match merged.last_mut() {
                Some(last) if last.merges_with(point.position.x) => *last = point,
                _ => merged.push(point),
            }
        }

        self.points = merged;
        self.update_stats();
    }

    /// Berechnet Minimum, Maximum und Mittelwert neu.
    ///
    /// Bei leerer Kurve bleiben die zuletzt bekannten Werte stehen.
    fn update_stats(&mut self) {
        if let Some(stats) = evaluator::aggregate(&self.points) {
            self.stats = stats;
        }
    }

    /// Stellt nach einer x-Verschiebung Sortierung und Mindestabstand wieder her.
    ///
    /// Sortiert stabil nach x und führt Punkte innerhalb `MERGE_EPSILON` zusammen.
    /// Bei einer Kollision gewinnt der bewegte Punkt samt Flags; sind beide
    /// bewegt oder beide unbewegt, gewinnt der spätere.
    fn settle_after_move(&mut self, moved: impl Fn(&CurvePoint) -> bool) {
        let sorted = self
            .points
            .windows(2)
            .all(|w| w[0].position.x <= w[1].position.x);
        if !sorted {
            self.points
                .sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        }

        let before = self.points.len();
        let mut settled: Vec<CurvePoint> = Vec::with_capacity(before);
        for point in self.points.drain(..) {
            match settled.last_mut() {
                Some(last) if last.merges_with(point.position.x) => {
                    if moved(&point) || !moved(&*last) {
                        *last = point;
                    }
                }
                _ => settled.push(point),
            }
        }
        self.points = settled;

        let absorbed = before - self.points.len();
        if absorbed > 0 {
            log::debug!("{absorbed} Punkt(e) nach Verschiebung zusammengeführt");
        }
    }

    /// Read-only Sicht auf alle Punkte in x-Reihenfolge.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Punkt an Index `index`.
    pub fn point(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    /// Iterator über alle Punkte (read-only).
    pub fn iter(&self) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter()
    }

    /// Iterator über benachbarte Punktpaare (Segmente).
    pub fn segments(&self) -> impl Iterator<Item = (&CurvePoint, &CurvePoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Gibt die Anzahl der Punkte zurück
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl selektierter Koordinaten (Anker und Kontrollpunkte getrennt gezählt).
    pub fn selected_count(&self) -> usize {
        self.points
            .iter()
            .map(|p| usize::from(p.selected_primary) + usize::from(p.selected_secondary))
            .sum()
    }

    /// Anzahl gezogener Koordinaten.
    pub fn dragging_count(&self) -> usize {
        self.points
            .iter()
            .map(|p| usize::from(p.dragging_primary) + usize::from(p.dragging_secondary))
            .sum()
    }

    /// x-Ausdehnung vom ersten bis zum letzten Punkt (0 bei weniger als zwei Punkten).
    pub fn span(&self) -> f32 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                last.position.x - first.position.x
            }
            _ => 0.0,
        }
    }

    /// Zuletzt berechnete Aggregate.
    pub fn aggregate(&self) -> CurveStats {
        self.stats
    }

    /// Kleinster y-Wert
    pub fn min_y(&self) -> f32 {
        self.stats.min
    }

    /// Größter y-Wert
    pub fn max_y(&self) -> f32 {
        self.stats.max
    }

    /// Mittelwert aller y-Werte
    pub fn average_y(&self) -> f32 {
        self.stats.average
    }

    /// Kurvenwert bei `x` (0 außerhalb des Bereichs).
    pub fn value_at(&self, x: f32) -> f32 {
        evaluator::value_at(&self.points, x)
    }

    /// Position auf Segment `index` → `index + 1` bei Parameter `t`.
    pub fn evaluate_segment(&self, index: usize, t: f32) -> Option<Vec2> {
        let point = self.points.get(index)?;
        let next = self.points.get(index + 1)?;
        Some(evaluator::evaluate(t, point, next))
    }

    /// Polylinie für Segment `index` → `index + 1`.
    pub fn sample_segment(&self, index: usize, steps: usize) -> Option<Vec<Vec2>> {
        let point = self.points.get(index)?;
        let next = self.points.get(index + 1)?;
        Some(evaluator::sample_segment(point, next, steps))
    }
}

#[cfg(test)]
mod tests;

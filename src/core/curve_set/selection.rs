//! Touch/Drag-Selektion: Treffer-Tests, Nearest-Pick, Fokus-Verschiebung.

use super::CurveSet;
use crate::core::point::{CurvePoint, ShiftDirection, ShiftMode};
use glam::Vec2;

/// Berechnet das achsen-alignierte Bounding-Rect aus zwei Eckpunkten.
fn rect_min_max(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    (a.min(b), a.max(b))
}

fn rect_contains(min: Vec2, max: Vec2, p: Vec2) -> bool {
    p.cmpge(min).all() && p.cmple(max).all()
}

impl CurveSet {
    /// Selektiert Anker und Kontrollpunkte aller Punkte; laufende Drags werden verworfen.
    pub fn select_all(&mut self) {
        for point in &mut self.points {
            point.selected_primary = true;
            point.selected_secondary = true;
            point.dragging_primary = false;
            point.dragging_secondary = false;
        }
    }

    /// Löscht Selektion und Drag-Zustand aller Punkte.
    pub fn deselect_all(&mut self) {
        for point in &mut self.points {
            point.clear_flags();
        }
    }

    /// Selektiert alle Koordinaten im Quadrat mit Halbbreite `tolerance` um `query`.
    ///
    /// Additiv: bestehende Selektion bleibt erhalten. Gibt die Anzahl getroffener Koordinaten zurück.
    pub fn hit_test(&mut self, query: Vec2, tolerance: f32) -> usize {
        let half = Vec2::splat(tolerance.abs());
        self.hit_test_rect(query - half, query + half)
    }

    /// Selektiert alle Koordinaten im Rechteck zwischen zwei beliebigen Ecken (inkl. Rand).
    pub fn hit_test_rect(&mut self, corner_a: Vec2, corner_b: Vec2) -> usize {
        let (min, max) = rect_min_max(corner_a, corner_b);
        let mut count = 0;
        for point in &mut self.points {
            if rect_contains(min, max, point.position) {
                point.selected_primary = true;
                count += 1;
            }
            if rect_contains(min, max, point.control) {
                point.selected_secondary = true;
                count += 1;
            }
        }
        count
    }

    /// Selektiert genau den Anker mit minimalem Abstand zu `query`.
    ///
    /// Alle anderen Anker verlieren ihre Selektion; bei Gleichstand gewinnt der erste.
    pub fn find_nearest(&mut self, query: Vec2) -> Option<usize> {
        let mut nearest: Option<(usize, f32)> = None;
        for (i, point) in self.points.iter_mut().enumerate() {
            point.selected_primary = false;
            let distance = query.distance(point.position);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((i, distance));
            }
        }

        let (index, _) = nearest?;
        self.points[index].selected_primary = true;
        Some(index)
    }

    /// Überführt alle selektierten Koordinaten in den Drag-Zustand.
    pub fn begin_drag(&mut self) -> usize {
        let mut count = 0;
        for point in &mut self.points {
            if point.selected_primary {
                point.dragging_primary = true;
                count += 1;
            }
            if point.selected_secondary {
                point.dragging_secondary = true;
                count += 1;
            }
        }
        count
    }

    /// Beendet eine Drag-Geste.
    ///
    /// Mit `keep_selection` bleiben die Punkte selektiert, sonst wird alles abgewählt.
    pub fn end_drag(&mut self, keep_selection: bool) {
        if keep_selection {
            for point in &mut self.points {
                point.dragging_primary = false;
                point.dragging_secondary = false;
            }
        } else {
            self.deselect_all();
        }
    }

    /// Verschiebt den Touch-Fokus der Anker um einen Index nach links oder rechts.
    ///
    /// Am Rand (kein Nachbar) bleibt der betroffene Punkt unverändert.
    pub fn shift_selection(&mut self, direction: ShiftDirection, mode: ShiftMode) {
        let len = self.points.len();
        if len == 0 {
            return;
        }

        match (mode, direction) {
            (ShiftMode::Move, ShiftDirection::Left) => {
                for i in 1..len {
                    if self.points[i].selected_primary {
                        self.points[i].selected_primary = false;
                        self.points[i - 1].selected_primary = true;
                    }
                }
            }
            (ShiftMode::Move, ShiftDirection::Right) => {
                for i in (1..len).rev() {
                    if self.points[i - 1].selected_primary {
                        self.points[i - 1].selected_primary = false;
                        self.points[i].selected_primary = true;
                    }
                }
            }
            (ShiftMode::Extend, ShiftDirection::Left) => {
                for i in 1..len {
                    if self.points[i].selected_primary {
                        self.points[i - 1].selected_primary = true;
                    }
                }
            }
            (ShiftMode::Extend, ShiftDirection::Right) => {
                for i in (1..len).rev() {
                    if self.points[i - 1].selected_primary {
                        self.points[i].selected_primary = true;
                    }
                }
            }
            (ShiftMode::Collapse, ShiftDirection::Left) => {
                collapse(self.points.iter_mut());
            }
            (ShiftMode::Collapse, ShiftDirection::Right) => {
                collapse(self.points.iter_mut().rev());
            }
        }
    }
}

/// Behält nur den ersten selektierten Anker in Iterationsreihenfolge.
fn collapse<'a>(points: impl Iterator<Item = &'a mut CurvePoint>) {
    let mut keep = true;
    for point in points.filter(|p| p.selected_primary) {
        point.selected_primary = keep;
        keep = false;
    }
}

//! Verschieben und Einrasten selektierter bzw. gezogener Punkte.

use super::CurveSet;
use crate::core::point::{AxisMask, CurvePoint, SnapDirection};
use glam::Vec2;

/// Welche Flags einen Punkt für eine Verschiebung qualifizieren.
#[derive(Clone, Copy)]
enum MoveSource {
    Touch,
    Drag,
}

impl MoveSource {
    fn flags(self, point: &CurvePoint) -> (bool, bool) {
        match self {
            MoveSource::Touch => (point.selected_primary, point.selected_secondary),
            MoveSource::Drag => (point.dragging_primary, point.dragging_secondary),
        }
    }
}

impl CurveSet {
    /// Verschiebt alle gezogenen Koordinaten um `offset`.
    ///
    /// Anker respektieren `axis`, Kontrollpunkte folgen dem vollen Offset.
    /// Landet ein Anker innerhalb `MERGE_EPSILON` eines anderen, werden beide
    /// zusammengeführt und der bewegte Punkt bleibt.
    /// Gibt die Anzahl bewegter Koordinaten zurück.
    pub fn translate_dragged(&mut self, offset: Vec2, axis: AxisMask) -> usize {
        self.translate_by(offset, axis, MoveSource::Drag)
    }

    /// Wie [`CurveSet::translate_dragged`], aber für selektierte Koordinaten (Tastatur-Nudge).
    pub fn translate_selected(&mut self, offset: Vec2, axis: AxisMask) -> usize {
        self.translate_by(offset, axis, MoveSource::Touch)
    }

    fn translate_by(&mut self, offset: Vec2, axis: AxisMask, source: MoveSource) -> usize {
        let anchor_offset = axis.apply(offset);
        let mut count = 0;
        for point in &mut self.points {
            let (primary, secondary) = source.flags(point);
            if primary {
                point.position += anchor_offset;
                count += 1;
            }
            if secondary {
                point.control += offset;
                count += 1;
            }
        }

        if count > 0 && anchor_offset.x != 0.0 {
            self.settle_after_move(|p| source.flags(p).0);
        }
        self.update_stats();
        count
    }

    /// Rundet die Anker aller selektierten Punkte in Richtung `direction`.
    ///
    /// Fallen dabei Anker auf dasselbe x, bleibt nur einer davon erhalten.
    ///
    /// Gibt die Anzahl eingerasteter Punkte zurück.
    pub fn snap(&mut self, direction: SnapDirection, axis: AxisMask) -> usize {
        let mut count = 0;
        for point in self.points.iter_mut().filter(|p| p.selected_primary) {
            point.position = direction.snap(point.position, axis);
            count += 1;
        }

        if count > 0 && axis.affects_x() {
            self.settle_after_move(|p| p.selected_primary);
        }
        self.update_stats();
        count
    }
}

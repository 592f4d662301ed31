//! Repräsentiert einen Kontrollpunkt der Kurve samt Touch/Drag-Zustand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Maximaler x-Abstand, unter dem zwei Punkte als identisch gelten (Merge beim Einfügen).
pub const MERGE_EPSILON: f32 = 0.01;

/// Art der Verbindung eines Punkts zu seinem Nachfolger (nächstgrößeres x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SegmentKind {
    /// Stufe: y des linken Punkts wird bis zum x des rechten Punkts gehalten
    #[default]
    Flat,
    /// Gerade Linie zwischen beiden Ankern
    Line,
    /// Kubische Bézier-Kurve über den Kontrollpunkt
    Curve,
}

impl From<SegmentKind> for u8 {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Flat => 0,
            SegmentKind::Line => 1,
            SegmentKind::Curve => 2,
        }
    }
}

impl TryFrom<u8> for SegmentKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SegmentKind::Flat),
            1 => Ok(SegmentKind::Line),
            2 => Ok(SegmentKind::Curve),
            other => Err(format!("Unbekannter Segment-Typ: {other}")),
        }
    }
}

/// Achsen-Einschränkung für Verschieben und Einrasten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisMask {
    /// Nur x-Koordinate
    X,
    /// Nur y-Koordinate
    #[default]
    Y,
    /// Beide Koordinaten
    XY,
}

impl AxisMask {
    /// Nächster Modus im Zyklus X → Y → XY → X.
    pub fn next(self) -> Self {
        match self {
            AxisMask::X => AxisMask::Y,
            AxisMask::Y => AxisMask::XY,
            AxisMask::XY => AxisMask::X,
        }
    }

    /// Wendet die Maske auf einen Offset an (gesperrte Achsen werden 0).
    pub fn apply(self, offset: Vec2) -> Vec2 {
        match self {
            AxisMask::X => Vec2::new(offset.x, 0.0),
            AxisMask::Y => Vec2::new(0.0, offset.y),
            AxisMask::XY => offset,
        }
    }

    /// Gibt `true` zurück, wenn die Maske die x-Achse einschließt.
    pub fn affects_x(self) -> bool {
        matches!(self, AxisMask::X | AxisMask::XY)
    }

    /// Gibt `true` zurück, wenn die Maske die y-Achse einschließt.
    pub fn affects_y(self) -> bool {
        matches!(self, AxisMask::Y | AxisMask::XY)
    }
}

/// Rundungsrichtung beim Einrasten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDirection {
    /// Aufrunden
    Ceil,
    /// Abrunden
    Floor,
}

impl SnapDirection {
    fn round(self, value: f32) -> f32 {
        match self {
            SnapDirection::Ceil => value.ceil(),
            SnapDirection::Floor => value.floor(),
        }
    }

    /// Rundet die von `axis` erfassten Komponenten von `position`.
    pub fn snap(self, position: Vec2, axis: AxisMask) -> Vec2 {
        let mut snapped = position;
        if axis.affects_x() {
            snapped.x = self.round(position.x);
        }
        if axis.affects_y() {
            snapped.y = self.round(position.y);
        }
        snapped
    }
}

/// Richtung, in die der Touch-Fokus wandert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Richtung kleinerer x-Werte
    Left,
    /// Richtung größerer x-Werte
    Right,
}

/// Strategie beim Verschieben des Touch-Fokus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftMode {
    /// Selektion wandert zum Nachbarn
    Move,
    /// Nachbar wird zusätzlich selektiert
    Extend,
    /// Nur der erste selektierte Punkt aus Sicht der Richtung bleibt übrig
    Collapse,
}

/// Abgeleiteter Zustand eines Punkts im Touch/Drag-Lebenszyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointState {
    /// Weder selektiert noch gezogen
    Idle,
    /// Teil der aktiven Selektion
    Selected,
    /// Wird von einer laufenden Drag-Geste bewegt
    Dragging,
}

/// Ein Kontrollpunkt der Kurve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Verbindung zum Nachfolger
    pub kind: SegmentKind,
    /// Anker-Position; x ist der Sortierschlüssel
    pub position: Vec2,
    /// Kontrollpunkt für `SegmentKind::Curve` (sonst Spiegel von `position`)
    pub control: Vec2,
    /// Anker gehört zur Selektion
    pub selected_primary: bool,
    /// Kontrollpunkt gehört zur Selektion
    pub selected_secondary: bool,
    /// Anker wird gezogen
    pub dragging_primary: bool,
    /// Kontrollpunkt wird gezogen
    pub dragging_secondary: bool,
}

impl CurvePoint {
    /// Erstellt einen unselektierten Punkt; der Kontrollpunkt spiegelt die Position.
    pub fn new(position: Vec2, kind: SegmentKind) -> Self {
        Self {
            kind,
            position,
            control: position,
            selected_primary: false,
            selected_secondary: false,
            dragging_primary: false,
            dragging_secondary: false,
        }
    }

    /// Setzt einen expliziten Kontrollpunkt (überschreibt den Mittelpunkt-Default).
    pub fn with_control(mut self, control: Vec2) -> Self {
        self.control = control;
        self
    }

    /// Gibt `true` zurück, wenn der Kontrollpunkt bewusst gesetzt wurde.
    pub fn has_explicit_control(&self) -> bool {
        self.control != self.position
    }

    /// Prüft ob zwei Punkte beim Einfügen zusammengeführt werden.
    pub fn merges_with(&self, other_x: f32) -> bool {
        (self.position.x - other_x).abs() <= MERGE_EPSILON
    }

    /// Zustand im Touch/Drag-Lebenszyklus.
    pub fn state(&self) -> PointState {
        if self.dragging_primary || self.dragging_secondary {
            PointState::Dragging
        } else if self.selected_primary || self.selected_secondary {
            PointState::Selected
        } else {
            PointState::Idle
        }
    }

    pub(crate) fn clear_flags(&mut self) {
        self.selected_primary = false;
        self.selected_secondary = false;
        self.dragging_primary = false;
        self.dragging_secondary = false;
    }

    /// Übernimmt Typ und Geometrie von `other`, behält aber den eigenen Touch/Drag-Zustand.
    pub(crate) fn assign_geometry(&mut self, other: &CurvePoint) {
        self.kind = other.kind;
        self.position = other.position;
        self.control = other.control;
    }
}

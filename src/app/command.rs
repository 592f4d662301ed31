use crate::core::{AxisMask, SegmentKind, ShiftDirection, ShiftMode, SnapDirection};
use crate::sync::CurveSnapshot;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum CurveCommand {
    /// Neuen Punkt einfügen (Merge bei gleichem x)
    InsertPoint {
        position: Vec2,
        kind: SegmentKind,
        control: Option<Vec2>,
    },
    /// Punkte mit selektiertem Anker löschen
    DeleteSelected,
    /// Alle Punkte entfernen
    Clear,
    /// Alle Punkte selektieren
    SelectAll,
    /// Selektion und Drag-Zustand aufheben
    DeselectAll,
    /// Treffer-Test um eine Kurvenposition; Toleranz aus Pick-Radius und Ansichts-Skalierung
    PickAt { position: Vec2, view_scale: f32 },
    /// Rechteck-Selektion (Gummiband)
    SelectInRect { corner_a: Vec2, corner_b: Vec2 },
    /// Nächstgelegenen Anker als einzige Selektion wählen
    FindNearest { position: Vec2 },
    /// Selektion in den Drag-Zustand überführen
    BeginDrag,
    /// Gezogene Punkte verschieben (aktive Achsen-Maske)
    DragBy { offset: Vec2 },
    /// Drag beenden; mit `keep_selection` (Modifier gehalten) bleibt die Selektion
    EndDrag { keep_selection: bool },
    /// Selektierte Punkte verschieben (Tastatur)
    NudgeSelected { offset: Vec2 },
    /// Selektierte Anker einrasten (aktive Achsen-Maske)
    Snap { direction: SnapDirection },
    /// Touch-Fokus verschieben
    ShiftSelection {
        direction: ShiftDirection,
        mode: ShiftMode,
    },
    /// Achsen-Maske setzen
    SetAxisMask { mask: AxisMask },
    /// Achsen-Maske weiterschalten (X → Y → XY)
    CycleAxisMask,
    /// Entfernten Snapshot übernehmen
    ApplyRemoteSnapshot { snapshot: CurveSnapshot },
}

impl CurveCommand {
    /// Name der Variante ohne Nutzdaten (für Log-Zeilen).
    pub fn name(&self) -> &'static str {
        match self {
            CurveCommand::InsertPoint { .. } => "InsertPoint",
            CurveCommand::DeleteSelected => "DeleteSelected",
            CurveCommand::Clear => "Clear",
            CurveCommand::SelectAll => "SelectAll",
            CurveCommand::DeselectAll => "DeselectAll",
            CurveCommand::PickAt { .. } => "PickAt",
            CurveCommand::SelectInRect { .. } => "SelectInRect",
            CurveCommand::FindNearest { .. } => "FindNearest",
            CurveCommand::BeginDrag => "BeginDrag",
            CurveCommand::DragBy { .. } => "DragBy",
            CurveCommand::EndDrag { .. } => "EndDrag",
            CurveCommand::NudgeSelected { .. } => "NudgeSelected",
            CurveCommand::Snap { .. } => "Snap",
            CurveCommand::ShiftSelection { .. } => "ShiftSelection",
            CurveCommand::SetAxisMask { .. } => "SetAxisMask",
            CurveCommand::CycleAxisMask => "CycleAxisMask",
            CurveCommand::ApplyRemoteSnapshot { .. } => "ApplyRemoteSnapshot",
        }
    }

    /// Gibt `true` zurück, wenn der Command Punktdaten (Geometrie oder Anzahl) ändern kann.
    ///
    /// Nur solche Commands werden an den Sync-Client weitergereicht.
    pub fn changes_points(&self) -> bool {
        matches!(
            self,
            CurveCommand::InsertPoint { .. }
                | CurveCommand::DeleteSelected
                | CurveCommand::Clear
                | CurveCommand::DragBy { .. }
                | CurveCommand::NudgeSelected { .. }
                | CurveCommand::Snap { .. }
        )
    }
}

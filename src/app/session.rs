//! Editier-Session: besitzt die Kurve und führt Commands zentral aus.

use super::{CommandLog, CurveCommand};
use crate::core::{AxisMask, CurvePoint, CurveSet};
use crate::shared::CurveOptions;
use crate::sync::SyncClient;
use glam::Vec2;

/// Anzahl Commands, die Fehlermeldungen als Kontext mitgeben.
const RECENT_COMMANDS_IN_LOG: usize = 5;

/// Orchestriert Commands auf einer Kurve und spiegelt Änderungen an den Sync-Client.
pub struct EditSession {
    curve: CurveSet,
    /// Laufzeit-Optionen
    pub options: CurveOptions,
    axis_mask: AxisMask,
    /// Ausgeführte Commands; die jüngsten landen in Warn-Logs bei Sync-Fehlern
    pub command_log: CommandLog,
    sync: Option<Box<dyn SyncClient>>,
}

impl EditSession {
    /// Erstellt eine Session ohne Sync-Anbindung.
    pub fn new(options: CurveOptions) -> Self {
        Self {
            curve: CurveSet::new(),
            axis_mask: options.default_axis_mask,
            options,
            command_log: CommandLog::new(),
            sync: None,
        }
    }

    /// Erstellt eine Session mit injiziertem Sync-Client.
    pub fn with_sync(options: CurveOptions, sync: Box<dyn SyncClient>) -> Self {
        let mut session = Self::new(options);
        session.sync = Some(sync);
        session
    }

    /// Read-only Zugriff auf die Kurve (Rendering, Abfragen).
    pub fn curve(&self) -> &CurveSet {
        &self.curve
    }

    /// Aktive Achsen-Maske für Drag, Nudge und Snap.
    pub fn axis_mask(&self) -> AxisMask {
        self.axis_mask
    }

    /// Polylinie des Segments ab Punkt `index` mit der konfigurierten Sample-Anzahl.
    pub fn segment_polyline(&self, index: usize) -> Option<Vec<Vec2>> {
        self.curve.sample_segment(index, self.options.curve_samples)
    }

    /// Gibt `true` zurück, wenn ein Sync-Client angebunden ist.
    pub fn has_sync(&self) -> bool {
        self.sync.is_some()
    }

    /// Führt einen Command aus und veröffentlicht geänderte Punktdaten.
    pub fn handle_command(&mut self, command: CurveCommand) -> anyhow::Result<()> {
        self.command_log.record(&command);
        let publish = command.changes_points();
        let axis = self.axis_mask;

        match command {
            // === Punkte ===
            CurveCommand::InsertPoint {
                position,
                kind,
                control,
            } => {
                let mut point = CurvePoint::new(position, kind);
                if let Some(control) = control {
                    point = point.with_control(control);
                }
                self.curve.insert(point);
            }
            CurveCommand::DeleteSelected => {
                self.curve.delete_selected();
            }
            CurveCommand::Clear => {
                self.curve.clear();
            }

            // === Selektion ===
            CurveCommand::SelectAll => self.curve.select_all(),
            CurveCommand::DeselectAll => self.curve.deselect_all(),
            CurveCommand::PickAt {
                position,
                view_scale,
            } => {
                let tolerance = self.options.pick_tolerance(view_scale);
                let hits = self.curve.hit_test(position, tolerance);
                log::debug!("Pick bei {position}: {hits} Treffer (Toleranz {tolerance})");
            }
            CurveCommand::SelectInRect { corner_a, corner_b } => {
                self.curve.hit_test_rect(corner_a, corner_b);
            }
            CurveCommand::FindNearest { position } => {
                self.curve.find_nearest(position);
            }
            CurveCommand::ShiftSelection { direction, mode } => {
                self.curve.shift_selection(direction, mode);
            }

            // === Drag & Transformation ===
            CurveCommand::BeginDrag => {
                self.curve.begin_drag();
            }
            CurveCommand::DragBy { offset } => {
                self.curve.translate_dragged(offset, axis);
            }
            CurveCommand::EndDrag { keep_selection } => self.curve.end_drag(keep_selection),
            CurveCommand::NudgeSelected { offset } => {
                self.curve.translate_selected(offset, axis);
            }
            CurveCommand::Snap { direction } => {
                self.curve.snap(direction, axis);
            }

            // === Achsen ===
            CurveCommand::SetAxisMask { mask } => self.axis_mask = mask,
            CurveCommand::CycleAxisMask => {
                self.axis_mask = self.axis_mask.next();
                log::debug!("Achsen-Maske: {:?}", self.axis_mask);
            }

            // === Sync ===
            CurveCommand::ApplyRemoteSnapshot { snapshot } => {
                if let Err(e) = snapshot.validate() {
                    log::warn!(
                        "Entfernter Snapshot verworfen: {e:#} (zuletzt: {})",
                        self.command_log.describe_recent(RECENT_COMMANDS_IN_LOG)
                    );
                    return Err(e);
                }
                self.curve.replace_from_snapshot(&snapshot);
            }
        }

        if publish {
            self.publish()?;
        }
        Ok(())
    }

    /// Sendet den aktuellen Zustand an den Sync-Client (falls vorhanden).
    pub fn publish(&mut self) -> anyhow::Result<()> {
        let Some(sync) = self.sync.as_mut() else {
            return Ok(());
        };

        let snapshot = self.curve.snapshot();
        sync.publish(&snapshot).map_err(|e| {
            log::warn!(
                "Sync-Veröffentlichung fehlgeschlagen: {e:#} (zuletzt: {})",
                self.command_log.describe_recent(RECENT_COMMANDS_IN_LOG)
            );
            e
        })
    }

    /// Holt höchstens einen empfangenen Snapshot ab und übernimmt ihn.
    ///
    /// Gibt `true` zurück, wenn ein Snapshot übernommen wurde.
    pub fn poll_remote(&mut self) -> anyhow::Result<bool> {
        let Some(snapshot) = self.sync.as_mut().and_then(|sync| sync.try_receive()) else {
            return Ok(false);
        };

        self.handle_command(CurveCommand::ApplyRemoteSnapshot { snapshot })?;
        Ok(true)
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(CurveOptions::default())
    }
}

//! Begrenztes Command-Log; die Session hängt die jüngsten Einträge an Fehlermeldungen.

use super::CurveCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<CurveCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &CurveCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Die jüngsten höchstens `count` Commands, älteste zuerst.
    pub fn recent(&self, count: usize) -> &[CurveCommand] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Kurzform der jüngsten Commands für Log-Zeilen, z.B. `SelectAll, BeginDrag`.
    pub fn describe_recent(&self, count: usize) -> String {
        self.recent(count)
            .iter()
            .map(CurveCommand::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[CurveCommand] {
        &self.entries
    }
}

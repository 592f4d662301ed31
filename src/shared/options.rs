//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::AxisMask;
use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln (Halbbreite des Treffer-Quadrats).
pub const PICK_RADIUS_PX: f32 = 3.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Anzahl Parameter-Schritte beim Abtasten eines Curve-Segments.
pub const CURVE_SAMPLES: usize = 40;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Die einbettende Anwendung wählt den Speicherort der TOML-Datei.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveOptions {
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub pick_radius_px: f32,
    /// Parameter-Schritte pro Curve-Segment für die Polylinie
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,
    /// Achsen-Einschränkung beim Start einer Session
    #[serde(default)]
    pub default_axis_mask: AxisMask,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            pick_radius_px: PICK_RADIUS_PX,
            curve_samples: CURVE_SAMPLES,
            default_axis_mask: AxisMask::default(),
        }
    }
}

/// Serde-Default für `curve_samples` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_curve_samples() -> usize {
    CURVE_SAMPLES
}

impl CurveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Treffer-Toleranz in Kurven-Einheiten für den aktuellen Zoom.
    ///
    /// `scale` ist der Faktor Kurven-Einheit → Pixel der Ansicht.
    pub fn pick_tolerance(&self, scale: f32) -> f32 {
        if scale > f32::EPSILON {
            self.pick_radius_px / scale
        } else {
            self.pick_radius_px
        }
    }
}

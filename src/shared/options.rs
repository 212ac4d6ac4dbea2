//! Zentrale Konfiguration für den JUGS Route Designer.
//!
//! `RouteOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::geometry::{SELF_INTERSECTION_MIN_POINTS, SELF_INTERSECTION_RECENT_EXCLUSION};
use crate::core::FieldDimensions;
use serde::{Deserialize, Serialize};

// ── Abtastung ───────────────────────────────────────────────────────

/// Abtastrate für Feldpunkte während des Zeichnens (Hz).
pub const SAMPLING_HZ: f32 = 30.0;

// ── Spielfeld ───────────────────────────────────────────────────────

/// Feldbreite in Yards.
pub const FIELD_WIDTH_YARDS: f32 = 53.3;
/// Dargestellte Feldlänge in Yards.
pub const FIELD_LENGTH_YARDS: f32 = 60.0;

// ── Validierung ─────────────────────────────────────────────────────

/// Mindestanzahl roher Touch-Punkte beim Loslassen.
pub const MIN_ROUTE_POINTS: usize = 10;

// ── Timer ───────────────────────────────────────────────────────────

/// Anzeigedauer des „Invalid route“-Hinweises (ms).
pub const INVALID_NOTICE_MS: f64 = 2000.0;
/// Dauer der Sende-Animation bis zur Bestätigungsseite (ms).
pub const LOADING_DURATION_MS: f64 = 3000.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `jugs_route_designer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Abtastrate (Hz) der Feldpunkte
    pub sampling_hz: f32,
    /// Feldbreite in Yards
    pub field_width_yards: f32,
    /// Dargestellte Feldlänge in Yards
    pub field_length_yards: f32,
    /// Mindestanzahl roher Punkte für eine gültige Route
    pub min_route_points: usize,
    /// Ab dieser Punktanzahl wird auf Selbstschnitt geprüft
    pub self_intersection_min_points: usize,
    /// Jüngste Punkte, die vom Selbstschnitt-Vergleich ausgenommen sind
    pub self_intersection_recent_exclusion: usize,
    /// Anzeigedauer des Ungültig-Hinweises (ms)
    pub invalid_notice_ms: f64,
    /// Dauer der Lade-Stufe (ms)
    pub loading_duration_ms: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            sampling_hz: SAMPLING_HZ,
            field_width_yards: FIELD_WIDTH_YARDS,
            field_length_yards: FIELD_LENGTH_YARDS,
            min_route_points: MIN_ROUTE_POINTS,
            self_intersection_min_points: SELF_INTERSECTION_MIN_POINTS,
            self_intersection_recent_exclusion: SELF_INTERSECTION_RECENT_EXCLUSION,
            invalid_notice_ms: INVALID_NOTICE_MS,
            loading_duration_ms: LOADING_DURATION_MS,
        }
    }
}

impl RouteOptions {
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

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("jugs_route_designer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("jugs_route_designer.toml")
    }

    /// Minimaler Abstand zweier Feldpunkte in ms (`1000 / sampling_hz`).
    pub fn sampling_interval_ms(&self) -> f64 {
        if self.sampling_hz > 0.0 {
            1000.0 / self.sampling_hz as f64
        } else {
            0.0
        }
    }

    /// Feldmaße aus den Optionen.
    pub fn field_dimensions(&self) -> FieldDimensions {
        FieldDimensions::new(self.field_width_yards, self.field_length_yards)
    }
}

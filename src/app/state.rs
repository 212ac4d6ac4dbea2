//! Application State: zentrale Datenhaltung.

use super::capture::CaptureSession;
use super::stage::Stage;
use super::CommandLog;
use crate::core::{FieldRoute, TimestampMs};
use crate::shared::RouteOptions;
use glam::Vec2;
use std::path::PathBuf;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Temporäre Statusnachricht (z.B. Fehler beim Speichern)
    pub status_message: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell angezeigte Stufe
    pub stage: Stage,
    /// Zeitpunkt (ms), zu dem die aktuelle Stufe betreten wurde
    pub stage_entered_ms: TimestampMs,
    /// Letzter bekannter Zeitstempel der Frame-/Event-Uhr
    pub now_ms: TimestampMs,
    /// Laufende Erfassungs-Sitzung (wird bei jedem Betreten von DrawRoute erneuert)
    pub capture: CaptureSession,
    /// Zuletzt gemeldete Größe der Zeichenfläche
    pub surface_size: Option<Vec2>,
    /// Zuletzt gesendete Route
    pub last_route: Option<FieldRoute>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: RouteOptions,
    /// Zieldatei für geänderte Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(RouteOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen.
    pub fn with_options(options: RouteOptions) -> Self {
        Self {
            stage: Stage::Home,
            stage_entered_ms: 0.0,
            now_ms: 0.0,
            capture: CaptureSession::new(&options),
            surface_size: None,
            last_route: None,
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
            options_path: None,
            should_exit: false,
        }
    }

    /// Verstrichene Zeit (ms) seit Betreten der aktuellen Stufe.
    pub fn stage_elapsed_ms(&self) -> f64 {
        (self.now_ms - self.stage_entered_ms).max(0.0)
    }

    /// Ob die Erfassungsfläche gerade aktiv ist.
    pub fn is_drawing_stage(&self) -> bool {
        self.stage == Stage::DrawRoute
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

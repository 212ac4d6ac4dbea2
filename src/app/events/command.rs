//! AppCommand: mutierende Schritte, die zentral ausgeführt werden.

use super::super::stage::Stage;
use crate::core::TimestampMs;
use crate::shared::RouteOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Stufe wechseln; Verlassen von DrawRoute beendet die Erfassung,
    /// Betreten erzeugt eine frische
    EnterStage { stage: Stage },
    /// Größe der Zeichenfläche übernehmen
    ApplySurfaceSize { size: Vec2 },
    /// Neuen Strich beginnen
    BeginStroke { pos: Vec2, time_ms: TimestampMs },
    /// Strich um einen Punkt verlängern
    ExtendStroke { pos: Vec2, time_ms: TimestampMs },
    /// Strich abschließen (Loslassen oder Abbruch)
    FinishStroke { time_ms: TimestampMs, cancelled: bool },
    /// Route bestätigen und senden
    ConfirmRoute,
    /// Route verwerfen
    DeclineRoute,
    /// Uhr vorrücken: Hinweis- und Lade-Timer prüfen
    AdvanceClock { time_ms: TimestampMs },
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: RouteOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}

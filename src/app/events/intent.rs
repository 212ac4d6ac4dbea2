//! AppIntent: Eingaben aus UI und System ohne eigene Mutationslogik.

use crate::core::TimestampMs;
use crate::shared::RouteOptions;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// „Start Training“ auf der Startseite
    StartRequested,
    /// „Back“ auf der Zeichenseite
    BackRequested,
    /// „Draw another route“ auf der Bestätigungsseite
    DrawAnotherRequested,
    /// Anwendung beenden
    ExitRequested,

    /// Zeichenfläche hat eine (neue) Pixelgröße
    SurfaceResized { size: Vec2 },
    /// Finger/Zeiger aufgesetzt (Geräte-Pixel)
    TouchStarted { pos: Vec2, time_ms: TimestampMs },
    /// Finger/Zeiger bewegt
    TouchMoved { pos: Vec2, time_ms: TimestampMs },
    /// Finger/Zeiger abgehoben
    TouchEnded { time_ms: TimestampMs },
    /// Touch vom System abgebrochen (z.B. Zeiger verlässt das Fenster)
    TouchCancelled { time_ms: TimestampMs },

    /// „Yes“ im Bestätigungsdialog
    RouteConfirmed,
    /// „No“ im Bestätigungsdialog
    RouteDeclined,

    /// Frame-Takt mit aktuellem Zeitstempel (Timer-Fortschritt)
    FrameTick { time_ms: TimestampMs },

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: RouteOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

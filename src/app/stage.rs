//! Navigations-Stufen der Anwendung.

/// Aktuell angezeigte Stufe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Startseite mit „Start Training“
    #[default]
    Home,
    /// Spielfeld mit Freihand-Erfassung
    DrawRoute,
    /// Sende-Animation, wechselt nach Ablauf automatisch weiter
    Loading,
    /// Bestätigung „Route Sent!“
    RouteSent,
}

impl Stage {
    /// Überschrift der Stufe.
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Home => "Automated JUGS Machine",
            Stage::DrawRoute => "Draw Your Route",
            Stage::Loading => "Sending route to JUGS Machine...",
            Stage::RouteSent => "Route Sent!",
        }
    }
}

//! Übergabe einer bestätigten Route an die Wurfmaschine.
//!
//! Es gibt keine Netzwerkverbindung: der Standard-Sink schreibt den
//! Diagnose-Datensatz ins Log.

use crate::core::FieldRoute;

/// Transportweg für bestätigte Routen.
pub trait RouteSink {
    /// Übergibt eine Route. Fehler werden an den Controller durchgereicht.
    fn send(&mut self, route: &FieldRoute) -> anyhow::Result<()>;
}

/// Schreibt den Routen-Datensatz per `log::info!`, die JSON-Form per `log::debug!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRouteSink;

impl RouteSink for LogRouteSink {
    fn send(&mut self, route: &FieldRoute) -> anyhow::Result<()> {
        log::info!("{}", route);
        log::debug!("Payload: {}", serde_json::to_string(route)?);
        Ok(())
    }
}

/// Merkt sich alle übergebenen Routen (Tests, Vorschau).
#[derive(Debug, Default, Clone)]
pub struct RecordingRouteSink {
    routes: Vec<FieldRoute>,
}

impl RecordingRouteSink {
    /// Erstellt einen leeren Sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bisher übergebene Routen in Reihenfolge.
    pub fn routes(&self) -> &[FieldRoute] {
        &self.routes
    }
}

impl RouteSink for RecordingRouteSink {
    fn send(&mut self, route: &FieldRoute) -> anyhow::Result<()> {
        self.routes.push(route.clone());
        Ok(())
    }
}

/// Sendet die Route über den Sink und merkt sie sich als letzte Route.
pub fn send_route(
    state: &mut crate::app::AppState,
    sink: &mut dyn RouteSink,
    route: FieldRoute,
) -> anyhow::Result<()> {
    sink.send(&route)?;
    log::info!("Route mit {} Punkten an JUGS Machine übergeben", route.len());
    state.last_route = Some(route);
    Ok(())
}

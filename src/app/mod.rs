//! Application-Layer: Controller, State, Events und Use-Cases.

/// Freihand-Erfassung einer Route (Zustandsmaschine)
pub mod capture;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod stage;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Stufe, Erfassung, Optionen).
pub mod state;
pub mod use_cases;

pub use capture::{CapturePhase, CaptureSession, RejectReason, StrokeOutcome};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use stage::Stage;
pub use state::{AppState, UiState};
pub use use_cases::send_route::{LogRouteSink, RecordingRouteSink, RouteSink};

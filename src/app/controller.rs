//! Application Controller für zentrale Event-Verarbeitung.

use super::capture::StrokeOutcome;
use super::use_cases::send_route::{LogRouteSink, RouteSink};
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    sink: Box<dyn RouteSink>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller, der Routen ins Log schreibt.
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogRouteSink))
    }

    /// Erstellt einen Controller mit eigenem Transportweg für Routen.
    pub fn with_sink(sink: Box<dyn RouteSink>) -> Self {
        Self { sink }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Navigation ===
            AppCommand::EnterStage { stage } => handlers::navigation::enter_stage(state, stage),
            AppCommand::AdvanceClock { time_ms } => {
                handlers::navigation::advance_clock(state, time_ms)
            }
            AppCommand::RequestExit => handlers::navigation::request_exit(state),

            // === Erfassung ===
            AppCommand::ApplySurfaceSize { size } => {
                handlers::capture::apply_surface_size(state, size)
            }
            AppCommand::BeginStroke { pos, time_ms } => {
                let outcome = handlers::capture::begin_stroke(state, pos, time_ms);
                log_outcome(outcome);
            }
            AppCommand::ExtendStroke { pos, time_ms } => {
                let outcome = handlers::capture::extend_stroke(state, pos, time_ms);
                log_outcome(outcome);
            }
            AppCommand::FinishStroke { time_ms, cancelled } => {
                let outcome = handlers::capture::finish_stroke(state, time_ms, cancelled);
                log_outcome(outcome);
            }
            AppCommand::ConfirmRoute => {
                handlers::capture::confirm_route(state, self.sink.as_mut())?
            }
            AppCommand::DeclineRoute => handlers::capture::decline_route(state),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}

fn log_outcome(outcome: StrokeOutcome) {
    match outcome {
        StrokeOutcome::Ignored | StrokeOutcome::Extended { .. } => {}
        other => log::debug!("Strich: {:?}", other),
    }
}

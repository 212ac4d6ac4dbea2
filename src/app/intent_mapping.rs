//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Intents, die zur aktuellen Stufe nicht passen, ergeben keine Commands.

use super::stage::Stage;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let drawing = state.is_drawing_stage();

    match intent {
        AppIntent::StartRequested if state.stage == Stage::Home => vec![AppCommand::EnterStage {
            stage: Stage::DrawRoute,
        }],
        AppIntent::BackRequested if drawing => vec![AppCommand::EnterStage { stage: Stage::Home }],
        AppIntent::DrawAnotherRequested if state.stage == Stage::RouteSent => {
            vec![AppCommand::EnterStage {
                stage: Stage::DrawRoute,
            }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::SurfaceResized { size } => vec![AppCommand::ApplySurfaceSize { size }],
        AppIntent::TouchStarted { pos, time_ms } if drawing => {
            vec![AppCommand::BeginStroke { pos, time_ms }]
        }
        AppIntent::TouchMoved { pos, time_ms } if drawing => {
            vec![AppCommand::ExtendStroke { pos, time_ms }]
        }
        AppIntent::TouchEnded { time_ms } if drawing => vec![AppCommand::FinishStroke {
            time_ms,
            cancelled: false,
        }],
        AppIntent::TouchCancelled { time_ms } if drawing => vec![AppCommand::FinishStroke {
            time_ms,
            cancelled: true,
        }],

        AppIntent::RouteConfirmed if drawing && state.capture.show_confirm_dialog() => vec![
            AppCommand::ConfirmRoute,
            AppCommand::EnterStage {
                stage: Stage::Loading,
            },
        ],
        AppIntent::RouteDeclined if drawing && state.capture.show_confirm_dialog() => {
            vec![AppCommand::DeclineRoute]
        }

        AppIntent::FrameTick { time_ms } => vec![AppCommand::AdvanceClock { time_ms }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],

        _ => Vec::new(),
    }
}

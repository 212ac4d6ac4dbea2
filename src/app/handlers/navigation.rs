//! Handler für Stufenwechsel, Uhr und Anwendungssteuerung.

use crate::app::capture::CaptureSession;
use crate::app::stage::Stage;
use crate::app::AppState;
use crate::core::TimestampMs;

/// Wechselt die Stufe.
///
/// Verlassen von DrawRoute beendet die Erfassung; Betreten erzeugt eine
/// frische Sitzung (damit öffnet sich auch die Ein-Routen-Sperre wieder).
pub fn enter_stage(state: &mut AppState, stage: Stage) {
    if state.stage == Stage::DrawRoute {
        state.capture.teardown();
    }
    if stage == Stage::DrawRoute {
        state.capture = CaptureSession::new(&state.options);
        if let Some(size) = state.surface_size {
            state.capture.layout_known(size);
        }
    }

    log::info!("Stufe: {:?} → {:?}", state.stage, stage);
    state.stage = stage;
    state.stage_entered_ms = state.now_ms;
}

/// Rückt die Uhr vor: blendet abgelaufene Hinweise aus und beendet die Lade-Stufe.
pub fn advance_clock(state: &mut AppState, time_ms: TimestampMs) {
    observe_time(state, time_ms);

    match state.stage {
        Stage::DrawRoute => {
            if state.capture.tick(state.now_ms) {
                log::debug!("Ungültig-Hinweis ausgeblendet");
            }
        }
        Stage::Loading if state.stage_elapsed_ms() >= state.options.loading_duration_ms => {
            enter_stage(state, Stage::RouteSent);
        }
        _ => {}
    }
}

/// Merkt sich den jüngsten Zeitstempel (die Uhr läuft nie rückwärts).
pub fn observe_time(state: &mut AppState, time_ms: TimestampMs) {
    if time_ms > state.now_ms {
        state.now_ms = time_ms;
    }
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

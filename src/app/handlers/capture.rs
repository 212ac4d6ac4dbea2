//! Handler für die Routen-Erfassung auf der Zeichenfläche.

use crate::app::capture::StrokeOutcome;
use crate::app::use_cases::send_route::{self, RouteSink};
use crate::app::AppState;
use crate::core::TimestampMs;
use glam::Vec2;

use super::navigation::observe_time;

/// Merkt sich die Flächengröße und reicht sie an die Erfassung weiter.
pub fn apply_surface_size(state: &mut AppState, size: Vec2) {
    state.surface_size = Some(size);
    if state.is_drawing_stage() {
        state.capture.layout_known(size);
    }
}

/// Holt eine während des Strichs verweigerte Flächengröße nach, sobald die
/// Erfassung wieder im Leerlauf ist.
fn sync_surface_size(state: &mut AppState) {
    if !state.is_drawing_stage() {
        return;
    }
    let Some(size) = state.surface_size else {
        return;
    };
    let current = state.capture.transform().map(|t| t.surface_size());
    if current != Some(size) && state.capture.layout_known(size) {
        log::debug!("Nachgeholte Flächengröße {}x{} übernommen", size.x, size.y);
    }
}

/// Touch-Down.
pub fn begin_stroke(state: &mut AppState, pos: Vec2, time_ms: TimestampMs) -> StrokeOutcome {
    observe_time(state, time_ms);
    state.capture.touch_down(pos, time_ms)
}

/// Touch-Move.
pub fn extend_stroke(state: &mut AppState, pos: Vec2, time_ms: TimestampMs) -> StrokeOutcome {
    observe_time(state, time_ms);
    let outcome = state.capture.touch_move(pos, time_ms);
    sync_surface_size(state);
    outcome
}

/// Touch-Up bzw. Touch-Cancel.
pub fn finish_stroke(state: &mut AppState, time_ms: TimestampMs, cancelled: bool) -> StrokeOutcome {
    observe_time(state, time_ms);
    let outcome = if cancelled {
        state.capture.touch_cancel(time_ms)
    } else {
        state.capture.touch_release(time_ms)
    };
    sync_surface_size(state);
    outcome
}

/// Übergibt die wartende Route an den Sink und übernimmt sie erst danach.
///
/// Schlägt das Senden fehl, bleibt die Route zur Bestätigung stehen.
pub fn confirm_route(state: &mut AppState, sink: &mut dyn RouteSink) -> anyhow::Result<()> {
    let Some(route) = state.capture.pending_route() else {
        log::warn!("Bestätigung ohne wartende Route ignoriert");
        return Ok(());
    };
    send_route::send_route(state, sink, route)?;
    state.capture.commit_pending();
    sync_surface_size(state);
    Ok(())
}

/// Verwirft die wartende Route.
pub fn decline_route(state: &mut AppState) {
    state.capture.decline();
    sync_surface_size(state);
}

//! Handler für den Options-Dialog.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::RouteOptions;

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: RouteOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset_options(state)
}

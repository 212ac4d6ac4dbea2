//! Übernahme und Persistenz der Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::RouteOptions;

/// Übernimmt neue Optionen und speichert sie, falls ein Zielpfad gesetzt ist.
///
/// Die laufende Erfassung behält ihre Schwellen; neue Werte gelten ab der
/// nächsten Zeichen-Sitzung.
pub fn apply_options(state: &mut AppState, options: RouteOptions) -> anyhow::Result<()> {
    state.options = options;
    match state.options_path.as_deref() {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}

/// Setzt Optionen auf Standardwerte zurück und speichert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, RouteOptions::default())
}

//! UI-Komponenten: Stufen-Seiten, Spielfeld, Input-Handling, Dialoge.

pub mod dialogs;
pub mod field;
pub mod input;
pub mod options_dialog;
/// Seiten der Stufen mit egui
///
/// Jede Stufe rendert ihre Seite und liefert AppIntents zurück; die
/// Zeichenfläche übersetzt Zeiger-Drags in Touch-Intents.
pub mod screens;

pub use dialogs::{show_confirm_dialog, show_invalid_notice};
pub use field::paint_field;
pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use screens::{
    render_draw_header, render_draw_surface, render_home, render_loading, render_route_sent,
};

//! Seiten der einzelnen Stufen: Start, Zeichnen, Senden, Bestätigung.

use super::{dialogs, field, InputState};
use crate::app::{AppIntent, AppState, Stage};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);

/// Startseite mit „Start Training“.
pub fn render_home(ui: &mut egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading("Automated");
        ui.label(
            egui::RichText::new("JUGS Machine")
                .size(32.0)
                .color(ACCENT)
                .strong(),
        );
        ui.add_space(8.0);
        ui.label("Draw custom routes and train with precision. Your AI-powered passing partner.");
        ui.add_space(24.0);
        if ui.button("Start Training").clicked() {
            events.push(AppIntent::StartRequested);
        }
        ui.add_space(8.0);
        if ui.small_button("Optionen").clicked() {
            events.push(AppIntent::OpenOptionsDialogRequested);
        }
    });

    events
}

/// Kopfzeile der Zeichenseite mit „Back“.
pub fn render_draw_header(ui: &mut egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            events.push(AppIntent::BackRequested);
        }
        ui.heading(Stage::DrawRoute.title());
    });

    events
}

/// Zeichenfläche: Feld malen, Zeiger-Events sammeln, Hinweis + Dialog zeigen.
pub fn render_draw_surface(
    ui: &mut egui::Ui,
    state: &AppState,
    input: &mut InputState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

    events.extend(input.collect_surface_events(ui, &response));
    field::paint_field(ui.painter(), rect, &state.capture);

    if state.capture.raw_path().is_empty() && state.capture.confirmed_routes().is_empty() {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Draw your route on the field\nTap and drag to create a path",
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }

    dialogs::show_invalid_notice(ui.ctx(), &state.capture);
    events.extend(dialogs::show_confirm_dialog(ui.ctx(), &state.capture));

    events
}

/// Sende-Animation mit Fortschrittsbalken.
pub fn render_loading(ui: &mut egui::Ui, state: &AppState) {
    let duration = state.options.loading_duration_ms;
    let progress = if duration > 0.0 {
        (state.stage_elapsed_ms() / duration).clamp(0.0, 1.0) as f32
    } else {
        1.0
    };

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.add(egui::Spinner::new().size(48.0).color(ACCENT));
        ui.add_space(16.0);
        ui.heading(Stage::Loading.title());
        ui.add_space(16.0);
        ui.add(egui::ProgressBar::new(progress).desired_width(240.0));
    });
}

/// Bestätigungsseite mit Routen-Zusammenfassung.
pub fn render_route_sent(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.label(
            egui::RichText::new(Stage::RouteSent.title())
                .size(32.0)
                .color(ACCENT)
                .strong(),
        );
        ui.label("The JUGS machine is positioning and will begin launch.");
        ui.add_space(12.0);

        if let Some(route) = &state.last_route {
            let final_text = route
                .final_point
                .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
                .unwrap_or_else(|| "N/A".to_string());
            ui.label(format!("Points: {} | Final: {} yd", route.len(), final_text));
        }
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Status: Ready").strong());
            ui.separator();
            ui.label(egui::RichText::new("Mode: Active").strong());
        });

        ui.add_space(24.0);
        if ui.button("Draw another route").clicked() {
            events.push(AppIntent::DrawAnotherRequested);
        }
    });

    events
}

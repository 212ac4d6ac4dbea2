//! Hinweise und Dialoge der Zeichenseite.

use crate::app::{AppIntent, CaptureSession};

/// Zeigt den „Invalid route“-Hinweis, solange die Erfassung ihn anfordert.
pub fn show_invalid_notice(ctx: &egui::Context, capture: &CaptureSession) {
    if !capture.show_invalid_notice() {
        return;
    }

    egui::Area::new(egui::Id::new("invalid_route_notice"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 64.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgb(183, 28, 28))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Invalid route")
                            .color(egui::Color32::WHITE)
                            .strong(),
                    );
                });
        });
}

/// Zeigt den Bestätigungsdialog als modales Fenster.
pub fn show_confirm_dialog(ctx: &egui::Context, capture: &CaptureSession) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !capture.show_confirm_dialog() {
        return events;
    }

    egui::Window::new("Confirm Route?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label("Send this route to the JUGS machine?");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("No").clicked() {
                        events.push(AppIntent::RouteDeclined);
                    }

                    if ui.button("Yes").clicked() {
                        events.push(AppIntent::RouteConfirmed);
                    }
                });
            });
        });

    events
}

//! Optionen-Dialog für Abtastung, Feldmaße, Schwellen und Timer.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Erfassung ───────────────────────────────────
            ui.collapsing("Erfassung", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Abtastrate (Hz):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.sampling_hz)
                                .range(1.0..=120.0)
                                .speed(1.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Min. Rohpunkte:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.min_route_points).range(2..=200))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Selbstschnitt ab Punkten:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.self_intersection_min_points)
                                .range(2..=500),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Ausgenommene jüngste Punkte:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.self_intersection_recent_exclusion)
                                .range(1..=200),
                        )
                        .changed();
                });
            });

            // ── Spielfeld ───────────────────────────────────
            ui.collapsing("Spielfeld", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Breite (Yards):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.field_width_yards)
                                .range(10.0..=100.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Länge (Yards):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.field_length_yards)
                                .range(10.0..=120.0)
                                .speed(1.0),
                        )
                        .changed();
                });
            });

            // ── Timer ───────────────────────────────────────
            ui.collapsing("Timer", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Hinweis (ms):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.invalid_notice_ms)
                                .range(250.0..=10000.0)
                                .speed(50.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Senden (ms):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.loading_duration_ms)
                                .range(0.0..=10000.0)
                                .speed(50.0),
                        )
                        .changed();
                });
            });

            ui.label("Änderungen gelten ab der nächsten Route.");
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

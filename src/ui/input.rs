//! Zeichenflächen-Input: Zeiger-Drag → Touch-Intents mit Zeitstempel.

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Zuletzt gemeldete Flächengröße
    last_surface_size: Option<Vec2>,
    /// Ob gerade ein Strich läuft
    stroke_active: bool,
    /// Zuletzt gemeldete Zeigerposition (Geräte-Pixel)
    last_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Flächen-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen sind relativ zur linken oberen Ecke von `response.rect`,
    /// Zeitstempel stammen aus der egui-Eingabeuhr (ms).
    pub fn collect_surface_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;
        let time_ms = ui.input(|i| i.time * 1000.0);

        let size = Vec2::new(rect.width(), rect.height());
        if self.last_surface_size != Some(size) {
            self.last_surface_size = Some(size);
            events.push(AppIntent::SurfaceResized { size });
        }

        let to_device = |pos: egui::Pos2| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);

        if response.drag_started_by(egui::PointerButton::Primary) {
            // Drag-Erkennung setzt erst nach einer Schwelle ein: Startpunkt = Press-Ursprung
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            let press_s = ui.input(|i| i.pointer.press_start_time());
            if let Some(origin) = origin {
                let start = to_device(origin);
                events.push(AppIntent::TouchStarted {
                    pos: start,
                    time_ms: press_time_ms(press_s, time_ms),
                });
                self.stroke_active = true;
                self.last_pos = Some(start);
            }
        }

        if self.stroke_active && response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos().map(to_device) {
                if self.last_pos != Some(pos) {
                    events.push(AppIntent::TouchMoved { pos, time_ms });
                    self.last_pos = Some(pos);
                }
            }
        }

        if self.stroke_active {
            if response.drag_stopped_by(egui::PointerButton::Primary) {
                events.push(AppIntent::TouchEnded { time_ms });
                self.end_stroke();
            } else if !response.dragged() {
                // Zeiger verschwunden oder Fokus verloren
                events.push(AppIntent::TouchCancelled { time_ms });
                self.end_stroke();
            }
        }

        events
    }

    /// Vergisst die Flächengröße, damit sie beim nächsten Frame erneut gemeldet wird.
    pub fn reset_surface(&mut self) {
        self.last_surface_size = None;
        self.end_stroke();
    }

    fn end_stroke(&mut self) {
        self.stroke_active = false;
        self.last_pos = None;
    }
}

/// Zeitstempel (ms) des Press-Events, begrenzt auf den aktuellen Frame.
fn press_time_ms(press_start_s: Option<f64>, now_ms: f64) -> f64 {
    press_start_s.map_or(now_ms, |s| (s * 1000.0).min(now_ms))
}

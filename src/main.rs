//! JUGS Route Designer.
//!
//! Freihand-Routen auf einem Football-Feld zeichnen und an die
//! Wurfmaschine „senden“ (egui + eframe).

use eframe::egui;
use jugs_route_designer::{ui, AppController, AppIntent, AppState, RouteOptions, Stage};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "JUGS Route Designer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 860.0])
                .with_title("JUGS Route Designer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "JUGS Route Designer",
            options,
            Box::new(|_cc| Ok(Box::new(DesignerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DesignerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl DesignerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = RouteOptions::config_path();
        let route_options = RouteOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(route_options);
        state.options_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for DesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let now_ms = ctx.input(|i| i.time * 1000.0);
        let stage_before = self.state.stage;

        let mut events = vec![AppIntent::FrameTick { time_ms: now_ms }];
        events.extend(self.collect_ui_events(ctx));

        self.process_events(events);

        if self.state.stage != stage_before {
            // Neue Sitzung braucht die Flächengröße erneut
            self.input.reset_surface();
        }

        self.maybe_request_repaint(ctx);
    }
}

impl DesignerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::ExitRequested);
        }

        if self.state.stage == Stage::DrawRoute {
            egui::TopBottomPanel::top("draw_header").show(ctx, |ui| {
                events.extend(ui::render_draw_header(ui));
            });
        }

        events.extend(ui::show_options_dialog(ctx, &self.state));

        if let Some(message) = &self.state.ui.status_message {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.label(message);
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| match self.state.stage {
                Stage::Home => events.extend(ui::render_home(ui)),
                Stage::DrawRoute => {
                    events.extend(ui::render_draw_surface(ui, &self.state, &mut self.input))
                }
                Stage::Loading => ui::render_loading(ui, &self.state),
                Stage::RouteSent => events.extend(ui::render_route_sent(ui, &self.state)),
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        // Deadline-basierte Timer brauchen Frames, auch ohne Eingabe
        if self.state.stage == Stage::Loading {
            ctx.request_repaint();
        } else if let Some(deadline) = self.state.capture.notice_deadline_ms() {
            let remaining = (deadline - self.state.now_ms).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_millis(remaining as u64 + 1));
        }
    }
}

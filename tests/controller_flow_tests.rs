use glam::Vec2;
use jugs_route_designer::{
    AppCommand, AppController, AppIntent, AppState, CapturePhase, FieldRoute, RouteOptions,
    RouteSink, Stage,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Sink, dessen Routen der Test nach der Übergabe an den Controller noch lesen kann.
#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<FieldRoute>>>);

impl RouteSink for SharedSink {
    fn send(&mut self, route: &FieldRoute) -> anyhow::Result<()> {
        self.0.borrow_mut().push(route.clone());
        Ok(())
    }
}

struct FailingSink;

impl RouteSink for FailingSink {
    fn send(&mut self, _route: &FieldRoute) -> anyhow::Result<()> {
        anyhow::bail!("Maschine nicht erreichbar")
    }
}

fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Startseite → Zeichenseite mit bekannter Flächengröße 200×600.
fn enter_draw_stage(controller: &mut AppController, state: &mut AppState) {
    handle(controller, state, AppIntent::StartRequested);
    handle(
        controller,
        state,
        AppIntent::SurfaceResized {
            size: Vec2::new(200.0, 600.0),
        },
    );
}

/// Senkrechter Strich mit `count` Rohpunkten im 50-ms-Takt ab `t0`, inkl. Loslassen.
fn draw_stroke(controller: &mut AppController, state: &mut AppState, count: usize, t0: f64) -> f64 {
    handle(
        controller,
        state,
        AppIntent::TouchStarted {
            pos: Vec2::new(100.0, 590.0),
            time_ms: t0,
        },
    );
    let mut t = t0;
    for i in 1..count {
        t = t0 + i as f64 * 50.0;
        handle(
            controller,
            state,
            AppIntent::TouchMoved {
                pos: Vec2::new(100.0, 590.0 - i as f32 * 10.0),
                time_ms: t,
            },
        );
    }
    handle(controller, state, AppIntent::TouchEnded { time_ms: t });
    t
}

#[test]
fn test_full_flow_sends_route_and_reaches_sent_stage() {
    let sink = SharedSink::default();
    let mut controller = AppController::with_sink(Box::new(sink.clone()));
    let mut state = AppState::new();

    enter_draw_stage(&mut controller, &mut state);
    assert_eq!(state.stage, Stage::DrawRoute);

    let released = draw_stroke(&mut controller, &mut state, 12, 100.0);
    assert!(state.capture.show_confirm_dialog());

    handle(&mut controller, &mut state, AppIntent::RouteConfirmed);
    assert_eq!(state.stage, Stage::Loading);

    let sent = sink.0.borrow();
    assert_eq!(sent.len(), 1);
    let route = &sent[0];
    let last = route.final_point.expect("Endpunkt erwartet");
    // Loslass-Punkt (100, 480) → lokal (0, 120) → 12 Yards
    assert!((last.x - 0.0).abs() < 1e-6);
    assert!((last.y - 12.0).abs() < 1e-6);
    assert_eq!(state.last_route.as_ref(), Some(route));
    drop(sent);

    handle(
        &mut controller,
        &mut state,
        AppIntent::FrameTick {
            time_ms: released + 2999.0,
        },
    );
    assert_eq!(state.stage, Stage::Loading);

    handle(
        &mut controller,
        &mut state,
        AppIntent::FrameTick {
            time_ms: released + 3000.0,
        },
    );
    assert_eq!(state.stage, Stage::RouteSent);
}

#[test]
fn test_draw_another_opens_fresh_session() {
    let mut controller = AppController::with_sink(Box::new(SharedSink::default()));
    let mut state = AppState::new();

    enter_draw_stage(&mut controller, &mut state);
    let released = draw_stroke(&mut controller, &mut state, 12, 0.0);
    handle(&mut controller, &mut state, AppIntent::RouteConfirmed);
    handle(
        &mut controller,
        &mut state,
        AppIntent::FrameTick {
            time_ms: released + 5000.0,
        },
    );
    assert_eq!(state.stage, Stage::RouteSent);

    handle(&mut controller, &mut state, AppIntent::DrawAnotherRequested);

    assert_eq!(state.stage, Stage::DrawRoute);
    assert!(state.capture.confirmed_routes().is_empty());
    // Flächengröße wird in die neue Sitzung übernommen
    assert!(state.capture.transform().is_some());
    assert!(state.capture.accepts_new_stroke());
}

#[test]
fn test_second_stroke_ignored_after_confirm_in_same_session() {
    let mut controller = AppController::with_sink(Box::new(SharedSink::default()));
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);
    draw_stroke(&mut controller, &mut state, 12, 0.0);

    // Direkt an der Erfassung bestätigen, ohne Stufenwechsel
    assert!(state.capture.confirm().is_some());
    handle(
        &mut controller,
        &mut state,
        AppIntent::TouchStarted {
            pos: Vec2::new(50.0, 50.0),
            time_ms: 2000.0,
        },
    );

    assert_eq!(state.capture.phase(), CapturePhase::Idle);
    assert!(state.capture.raw_path().is_empty());
}

#[test]
fn test_short_stroke_shows_notice_until_deadline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);

    let released = draw_stroke(&mut controller, &mut state, 9, 0.0);
    assert!(state.capture.show_invalid_notice());
    assert!(!state.capture.show_confirm_dialog());
    assert_eq!(state.stage, Stage::DrawRoute);

    handle(
        &mut controller,
        &mut state,
        AppIntent::FrameTick {
            time_ms: released + 1999.0,
        },
    );
    assert!(state.capture.show_invalid_notice());

    handle(
        &mut controller,
        &mut state,
        AppIntent::FrameTick {
            time_ms: released + 2000.0,
        },
    );
    assert!(!state.capture.show_invalid_notice());
}

#[test]
fn test_declined_route_is_not_sent() {
    let sink = SharedSink::default();
    let mut controller = AppController::with_sink(Box::new(sink.clone()));
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);
    draw_stroke(&mut controller, &mut state, 12, 0.0);

    handle(&mut controller, &mut state, AppIntent::RouteDeclined);

    assert_eq!(state.stage, Stage::DrawRoute);
    assert!(sink.0.borrow().is_empty());
    assert!(state.last_route.is_none());
    assert!(state.capture.accepts_new_stroke());
}

#[test]
fn test_back_tears_down_capture() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);
    let released = draw_stroke(&mut controller, &mut state, 5, 0.0);
    assert!(state.capture.show_invalid_notice());

    handle(&mut controller, &mut state, AppIntent::BackRequested);

    assert_eq!(state.stage, Stage::Home);
    assert!(state.capture.is_torn_down());
    assert!(!state.capture.show_invalid_notice());

    // Touch-Events auf der Startseite erzeugen keine Commands
    let logged = state.command_log.len();
    handle(
        &mut controller,
        &mut state,
        AppIntent::TouchStarted {
            pos: Vec2::new(100.0, 500.0),
            time_ms: released + 10.0,
        },
    );
    assert_eq!(state.command_log.len(), logged);
}

#[test]
fn test_sink_error_keeps_route_pending() {
    let mut controller = AppController::with_sink(Box::new(FailingSink));
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);
    let released = draw_stroke(&mut controller, &mut state, 12, 0.0);

    let result = controller.handle_intent(&mut state, AppIntent::RouteConfirmed);

    assert!(result.is_err());
    assert!(state.last_route.is_none());
    assert_eq!(state.stage, Stage::DrawRoute);
    assert_eq!(state.capture.phase(), CapturePhase::PendingConfirm);
    assert!(state.capture.show_confirm_dialog());
    assert!(state.capture.confirmed_routes().is_empty());
    assert_eq!(state.capture.raw_path().len(), 12);

    // Verwerfen gibt die Fläche wieder frei
    handle(&mut controller, &mut state, AppIntent::RouteDeclined);
    assert!(state.capture.accepts_new_stroke());
    handle(
        &mut controller,
        &mut state,
        AppIntent::TouchStarted {
            pos: Vec2::new(100.0, 500.0),
            time_ms: released + 100.0,
        },
    );
    assert_eq!(state.capture.phase(), CapturePhase::Drawing);
}

/// Schlägt beim ersten Senden fehl, danach nicht mehr.
#[derive(Clone, Default)]
struct FlakySink {
    attempts: Rc<RefCell<usize>>,
    sent: SharedSink,
}

impl RouteSink for FlakySink {
    fn send(&mut self, route: &FieldRoute) -> anyhow::Result<()> {
        let mut attempts = self.attempts.borrow_mut();
        *attempts += 1;
        if *attempts == 1 {
            anyhow::bail!("Zeitüberschreitung");
        }
        self.sent.send(route)
    }
}

#[test]
fn test_confirm_can_be_retried_after_sink_error() {
    let sink = FlakySink::default();
    let mut controller = AppController::with_sink(Box::new(sink.clone()));
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);
    draw_stroke(&mut controller, &mut state, 12, 0.0);

    assert!(controller
        .handle_intent(&mut state, AppIntent::RouteConfirmed)
        .is_err());
    handle(&mut controller, &mut state, AppIntent::RouteConfirmed);

    assert_eq!(state.stage, Stage::Loading);
    assert_eq!(sink.sent.0.borrow().len(), 1);
    assert_eq!(state.last_route.as_ref(), sink.sent.0.borrow().first());
}

#[test]
fn test_resize_during_stroke_applies_after_reject() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);

    handle(
        &mut controller,
        &mut state,
        AppIntent::TouchStarted {
            pos: Vec2::new(100.0, 590.0),
            time_ms: 0.0,
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::SurfaceResized {
            size: Vec2::new(400.0, 800.0),
        },
    );
    // Während des Strichs bleibt die alte Geometrie gültig
    let surface = state.capture.transform().map(|t| t.surface_size());
    assert_eq!(surface, Some(Vec2::new(200.0, 600.0)));

    handle(&mut controller, &mut state, AppIntent::TouchEnded { time_ms: 50.0 });

    assert!(state.capture.show_invalid_notice());
    let surface = state.capture.transform().map(|t| t.surface_size());
    assert_eq!(surface, Some(Vec2::new(400.0, 800.0)));
    let origin = state.capture.transform().map(|t| t.origin());
    assert_eq!(origin, Some(Vec2::new(200.0, 800.0)));
}

#[test]
fn test_resize_while_pending_applies_after_decline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    enter_draw_stage(&mut controller, &mut state);
    draw_stroke(&mut controller, &mut state, 12, 0.0);

    handle(
        &mut controller,
        &mut state,
        AppIntent::SurfaceResized {
            size: Vec2::new(300.0, 900.0),
        },
    );
    let surface = state.capture.transform().map(|t| t.surface_size());
    assert_eq!(surface, Some(Vec2::new(200.0, 600.0)));

    handle(&mut controller, &mut state, AppIntent::RouteDeclined);

    let surface = state.capture.transform().map(|t| t.surface_size());
    assert_eq!(surface, Some(Vec2::new(300.0, 900.0)));
}

#[test]
fn test_surface_size_before_start_is_applied_on_entry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::SurfaceResized {
            size: Vec2::new(300.0, 900.0),
        },
    );
    handle(&mut controller, &mut state, AppIntent::StartRequested);

    let origin = state.capture.transform().map(|t| t.origin());
    assert_eq!(origin, Some(Vec2::new(150.0, 900.0)));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    handle(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_changed_options_apply_to_next_session_and_persist() {
    let dir = std::env::temp_dir().join(format!("jugs_flow_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
    let path = dir.join("jugs_route_designer.toml");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options_path = Some(path.clone());

    let options = RouteOptions {
        min_route_points: 5,
        ..RouteOptions::default()
    };
    handle(
        &mut controller,
        &mut state,
        AppIntent::OptionsChanged {
            options: options.clone(),
        },
    );
    assert_eq!(RouteOptions::load_from_file(&path), options);

    enter_draw_stage(&mut controller, &mut state);
    draw_stroke(&mut controller, &mut state, 6, 0.0);
    assert!(state.capture.show_confirm_dialog());

    let _ = std::fs::remove_dir_all(&dir);
}

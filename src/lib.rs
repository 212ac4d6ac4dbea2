//! JUGS Route Designer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CapturePhase, CaptureSession, LogRouteSink,
    RecordingRouteSink, RejectReason, RouteSink, Stage, StrokeOutcome, UiState,
};
pub use core::{
    path_self_intersects, path_to_curve, segments_intersect, CurvePath, FieldDimensions,
    FieldLayout, FieldPoint, FieldRoute, FieldTransform, LocalPoint, RawPath, SampledPath,
};
pub use shared::RouteOptions;

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die serialisierbaren Laufzeit-Optionen, die `app` und `ui`
//! gemeinsam lesen.

pub mod options;

pub use options::RouteOptions;
pub use options::{INVALID_NOTICE_MS, LOADING_DURATION_MS, MIN_ROUTE_POINTS, SAMPLING_HZ};

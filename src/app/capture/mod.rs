//! Erfassung einer Freihand-Route: Touch-Events → Rohpfad + abgetasteter Pfad.
//!
//! Ablauf: `Idle` → `Drawing` → (`Idle` mit Hinweis | `PendingConfirm`) → `Idle`.
//! Nach der ersten bestätigten Route nimmt die Sitzung keine Striche mehr an.
//!
//! Aufgeteilt in:
//! - `state`: Phasen, Ergebnis-Enums, `CaptureSession` und Abfragen
//! - `lifecycle`: Übergänge (layout, touch, confirm/decline, tick, teardown)
//! - `sampling`: Abtast-Uhr für die Feldpunkte
//! - `notice`: zeitlich begrenzter Ungültig-Hinweis

mod lifecycle;
pub mod notice;
pub mod sampling;
mod state;

pub use notice::NoticeTimer;
pub use sampling::SamplingClock;
pub use state::{CapturePhase, CaptureSession, RejectReason, StrokeOutcome};

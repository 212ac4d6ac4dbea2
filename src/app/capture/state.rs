//! State-Definitionen und Konstruktor der Routen-Erfassung.

use super::notice::NoticeTimer;
use super::sampling::SamplingClock;
use crate::core::{FieldDimensions, FieldTransform, RawPath, SampledPath};
use crate::shared::RouteOptions;

/// Phase der Erfassung.
///
/// „Abgelehnt“ ist keine eigene Phase: eine Ablehnung führt direkt nach
/// `Idle` und zeigt nebenbei den zeitlich begrenzten Hinweis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    /// Kein aktiver Strich, Fläche bereit
    #[default]
    Idle,
    /// Finger liegt auf, Punkte werden gesammelt
    Drawing,
    /// Gültiger Strich wartet auf Ja/Nein des Nutzers
    PendingConfirm,
}

/// Grund einer verworfenen Route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Jüngstes Segment kreuzt ein älteres Segment
    SelfIntersection,
    /// Zu wenige Rohpunkte beim Loslassen
    TooShort,
}

/// Rückgabe der Touch-Handler, steuert die Reaktion der App-Schicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// Event passt nicht zur aktuellen Phase (oder Gate geschlossen)
    Ignored,
    /// Neuer Strich begonnen
    Started,
    /// Punkt übernommen; `sampled` = auch als Feldpunkt übernommen
    Extended { sampled: bool },
    /// Strich verworfen, Hinweis angezeigt
    Rejected(RejectReason),
    /// Strich gültig, Bestätigungsdialog anzeigen
    AwaitingConfirm,
}

/// Eigentümer des laufenden Strichs, des Ursprungs und der bestätigten Routen.
///
/// Eine Instanz entspricht einer Zeichen-Sitzung; nach der ersten bestätigten
/// Route nimmt sie keine neuen Striche mehr an.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    pub(crate) phase: CapturePhase,
    /// Ursprung + Skalierung (None bis die Flächengröße bekannt ist)
    pub(crate) transform: Option<FieldTransform>,
    /// Nominale Feldmaße für neue Transformationen
    pub(crate) dimensions: FieldDimensions,
    /// Jeder Move-Punkt im Geräte-Raum (für das Live-Rendering)
    pub(crate) raw_path: RawPath,
    /// Zeitlich ausgedünnte Punkte relativ zum Ursprung
    pub(crate) sampled_path: SampledPath,
    /// Rohpfade bestätigter Routen (nur zum Neuzeichnen)
    pub(crate) confirmed_routes: Vec<RawPath>,
    pub(crate) clock: SamplingClock,
    pub(crate) notice: NoticeTimer,
    pub(crate) min_route_points: usize,
    pub(crate) self_intersection_min_points: usize,
    pub(crate) self_intersection_recent_exclusion: usize,
    /// Gesetzt nach `teardown`: keine weiteren Übergänge
    pub(crate) torn_down: bool,
}

impl CaptureSession {
    /// Erstellt eine leere Sitzung mit den gegebenen Optionen.
    pub fn new(options: &RouteOptions) -> Self {
        Self {
            phase: CapturePhase::Idle,
            transform: None,
            dimensions: options.field_dimensions(),
            raw_path: RawPath::new(),
            sampled_path: SampledPath::new(),
            confirmed_routes: Vec::new(),
            clock: SamplingClock::new(options.sampling_interval_ms()),
            notice: NoticeTimer::new(options.invalid_notice_ms),
            min_route_points: options.min_route_points,
            self_intersection_min_points: options.self_intersection_min_points,
            self_intersection_recent_exclusion: options.self_intersection_recent_exclusion,
            torn_down: false,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// Ursprung + Skalierung, sobald die Flächengröße bekannt ist.
    pub fn transform(&self) -> Option<&FieldTransform> {
        self.transform.as_ref()
    }

    /// Laufender Rohpfad (Live-Rendering).
    pub fn raw_path(&self) -> &RawPath {
        &self.raw_path
    }

    /// Laufender abgetasteter Pfad.
    pub fn sampled_path(&self) -> &SampledPath {
        &self.sampled_path
    }

    /// Rohpfade der bestätigten Routen.
    pub fn confirmed_routes(&self) -> &[RawPath] {
        &self.confirmed_routes
    }

    /// Signal „Invalid route“-Hinweis anzeigen.
    pub fn show_invalid_notice(&self) -> bool {
        self.notice.is_visible()
    }

    /// Ablaufzeitpunkt des Hinweises (None wenn verborgen).
    pub fn notice_deadline_ms(&self) -> Option<f64> {
        self.notice.deadline_ms()
    }

    /// Signal „Confirm Route?“-Dialog anzeigen.
    pub fn show_confirm_dialog(&self) -> bool {
        self.phase == CapturePhase::PendingConfirm
    }

    /// Ob ein neuer Strich begonnen werden darf.
    pub fn accepts_new_stroke(&self) -> bool {
        !self.torn_down
            && self.phase == CapturePhase::Idle
            && self.confirmed_routes.is_empty()
            && self.transform.is_some()
    }

    /// Ob die Sitzung beendet wurde.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

//! Zeitlich begrenzter „Invalid route“-Hinweis.
//!
//! Der Timer ist deadline-basiert und läuft auf derselben Uhr wie die
//! Touch-Events. Ein neuer Hinweis ersetzt die alte Deadline, `cancel`
//! verwirft sie vollständig.

use crate::core::TimestampMs;

/// Sichtbarkeit und Ablaufzeitpunkt des Hinweises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoticeTimer {
    duration_ms: f64,
    deadline_ms: Option<TimestampMs>,
}

impl NoticeTimer {
    /// Erstellt einen verborgenen Hinweis mit fester Anzeigedauer.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            deadline_ms: None,
        }
    }

    /// Zeigt den Hinweis ab `now` an; eine laufende Deadline wird ersetzt.
    pub fn show(&mut self, now: TimestampMs) {
        self.deadline_ms = Some(now + self.duration_ms);
    }

    /// Verwirft den Hinweis samt Deadline.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Blendet den Hinweis aus, sobald die Deadline erreicht ist.
    /// Gibt `true` zurück, wenn er in diesem Aufruf ausgeblendet wurde.
    pub fn expire(&mut self, now: TimestampMs) -> bool {
        match self.deadline_ms {
            Some(deadline) if now >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Ob der Hinweis aktuell sichtbar ist.
    pub fn is_visible(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Ausstehende Deadline (für Repaint-Planung der UI).
    pub fn deadline_ms(&self) -> Option<TimestampMs> {
        self.deadline_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_duration() {
        let mut notice = NoticeTimer::new(2000.0);
        notice.show(100.0);
        assert!(notice.is_visible());
        assert!(!notice.expire(2099.0));
        assert!(notice.is_visible());
        assert!(notice.expire(2100.0));
        assert!(!notice.is_visible());
    }

    #[test]
    fn newer_notice_replaces_deadline() {
        let mut notice = NoticeTimer::new(2000.0);
        notice.show(0.0);
        notice.show(1500.0);
        // Die alte Deadline (2000) darf den neuen Hinweis nicht ausblenden
        assert!(!notice.expire(2000.0));
        assert!(notice.is_visible());
        assert!(notice.expire(3500.0));
    }

    #[test]
    fn cancel_drops_pending_deadline() {
        let mut notice = NoticeTimer::new(2000.0);
        notice.show(0.0);
        notice.cancel();
        assert!(!notice.is_visible());
        assert!(!notice.expire(5000.0));
    }
}

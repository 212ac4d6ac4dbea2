//! Übergänge der Erfassung (layout, touch down/move/up, confirm, decline, tick, teardown).

use super::state::{CapturePhase, CaptureSession, RejectReason, StrokeOutcome};
use crate::core::{extension_self_intersects, FieldRoute, FieldTransform, TimestampMs};
use glam::Vec2;

impl CaptureSession {
    /// Übernimmt die Pixelgröße der Zeichenfläche und berechnet Ursprung + Skalierung.
    ///
    /// Nur im Leerlauf wirksam; eine Fläche ohne Ausdehnung lässt die
    /// Transformation unverändert. Gibt `true` zurück, wenn übernommen.
    pub fn layout_known(&mut self, surface_size: Vec2) -> bool {
        if self.torn_down || self.phase != CapturePhase::Idle {
            return false;
        }
        if surface_size.x <= 0.0 || surface_size.y <= 0.0 {
            log::debug!(
                "Flächengröße {}x{} ignoriert",
                surface_size.x,
                surface_size.y
            );
            return false;
        }
        let transform = FieldTransform::new(surface_size, self.dimensions);
        log::debug!(
            "Ursprung gesetzt: ({:.1}, {:.1}), Skalierung x={:.3} y={:.3}",
            transform.origin().x,
            transform.origin().y,
            transform.x_scale(),
            transform.y_scale()
        );
        self.transform = Some(transform);
        true
    }

    /// Beginnt einen neuen Strich.
    ///
    /// Ignoriert, solange kein Layout bekannt ist oder bereits eine Route
    /// bestätigt wurde.
    pub fn touch_down(&mut self, pos: Vec2, now: TimestampMs) -> StrokeOutcome {
        if !self.accepts_new_stroke() {
            return StrokeOutcome::Ignored;
        }
        let Some(transform) = self.transform else {
            return StrokeOutcome::Ignored;
        };

        self.raw_path.clear();
        self.sampled_path.clear();
        self.raw_path.push(pos);
        self.sampled_path.push(transform.device_to_local(pos), now);
        self.clock.reset(now);
        self.phase = CapturePhase::Drawing;

        log::debug!("Strich begonnen bei ({:.1}, {:.1})", pos.x, pos.y);
        StrokeOutcome::Started
    }

    /// Verlängert den laufenden Strich um einen Punkt.
    ///
    /// Kreuzt das neue Segment ein älteres, wird der Strich sofort verworfen.
    pub fn touch_move(&mut self, pos: Vec2, now: TimestampMs) -> StrokeOutcome {
        if self.torn_down || self.phase != CapturePhase::Drawing {
            return StrokeOutcome::Ignored;
        }
        let Some(transform) = self.transform else {
            return StrokeOutcome::Ignored;
        };

        if extension_self_intersects(
            self.raw_path.points(),
            pos,
            self.self_intersection_min_points,
            self.self_intersection_recent_exclusion,
        ) {
            return self.reject(RejectReason::SelfIntersection, now);
        }
        self.raw_path.push(pos);

        let sampled = self.clock.try_sample(now);
        if sampled {
            self.sampled_path.push(transform.device_to_local(pos), now);
        }
        StrokeOutcome::Extended { sampled }
    }

    /// Finger abgehoben: Mindestlänge prüfen, dann Bestätigung anfordern.
    pub fn touch_release(&mut self, now: TimestampMs) -> StrokeOutcome {
        if self.torn_down || self.phase != CapturePhase::Drawing {
            return StrokeOutcome::Ignored;
        }
        let Some(transform) = self.transform else {
            return StrokeOutcome::Ignored;
        };

        // Mindestlänge zählt Rohpunkte, nicht abgetastete Punkte
        if self.raw_path.len() < self.min_route_points {
            return self.reject(RejectReason::TooShort, now);
        }

        // Exakter Endpunkt, unabhängig von der Abtast-Uhr
        if let Some(last) = self.raw_path.last() {
            self.sampled_path.push(transform.device_to_local(last), now);
        }
        self.phase = CapturePhase::PendingConfirm;

        log::debug!(
            "Strich beendet: {} Rohpunkte, {} Feldpunkte, warte auf Bestätigung",
            self.raw_path.len(),
            self.sampled_path.len()
        );
        StrokeOutcome::AwaitingConfirm
    }

    /// Abbruch durch das System, identisch zu `touch_release`.
    pub fn touch_cancel(&mut self, now: TimestampMs) -> StrokeOutcome {
        self.touch_release(now)
    }

    /// Gerundete Feld-Route des wartenden Strichs, ohne den Zustand zu ändern.
    ///
    /// `None` außerhalb von `PendingConfirm`.
    pub fn pending_route(&self) -> Option<FieldRoute> {
        if self.torn_down || self.phase != CapturePhase::PendingConfirm {
            return None;
        }
        self.transform
            .as_ref()
            .map(|t| FieldRoute::from_samples(&self.sampled_path, t))
    }

    /// Übernimmt den wartenden Strich: Rohpfad wandert in die bestätigten
    /// Routen, Arbeits-Pfade werden geleert. Gibt `true` zurück, wenn übernommen.
    pub fn commit_pending(&mut self) -> bool {
        if self.torn_down || self.phase != CapturePhase::PendingConfirm {
            return false;
        }
        let raw = std::mem::take(&mut self.raw_path);
        self.confirmed_routes.push(raw);
        self.sampled_path.clear();
        self.phase = CapturePhase::Idle;
        true
    }

    /// Nutzer bestätigt die Route: [`Self::pending_route`] plus [`Self::commit_pending`].
    pub fn confirm(&mut self) -> Option<FieldRoute> {
        let route = self.pending_route()?;
        self.commit_pending();
        log::debug!("Route bestätigt: {} Punkte", route.len());
        Some(route)
    }

    /// Nutzer verwirft die Route. Gibt `true` zurück, wenn etwas verworfen wurde.
    pub fn decline(&mut self) -> bool {
        if self.torn_down || self.phase != CapturePhase::PendingConfirm {
            return false;
        }
        self.clear_working_paths();
        self.phase = CapturePhase::Idle;
        log::debug!("Route vom Nutzer verworfen");
        true
    }

    /// Frame-Takt: blendet abgelaufene Hinweise aus.
    /// Gibt `true` zurück, wenn sich die Sichtbarkeit geändert hat.
    pub fn tick(&mut self, now: TimestampMs) -> bool {
        if self.torn_down {
            return false;
        }
        self.notice.expire(now)
    }

    /// Beendet die Sitzung: Timer verwerfen, Pfade leeren, keine Übergänge mehr.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.notice.cancel();
        self.clear_working_paths();
        self.phase = CapturePhase::Idle;
        self.torn_down = true;
        log::debug!("Erfassung beendet");
    }

    fn reject(&mut self, reason: RejectReason, now: TimestampMs) -> StrokeOutcome {
        log::warn!(
            "Route verworfen ({:?}) nach {} Rohpunkten",
            reason,
            self.raw_path.len()
        );
        self.clear_working_paths();
        self.phase = CapturePhase::Idle;
        self.notice.show(now);
        StrokeOutcome::Rejected(reason)
    }

    fn clear_working_paths(&mut self) {
        self.raw_path.clear();
        self.sampled_path.clear();
    }
}

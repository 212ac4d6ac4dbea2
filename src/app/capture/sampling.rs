//! Abtast-Uhr: begrenzt die Rate der Feldpunkte während eines Strichs.

use crate::core::TimestampMs;

/// Merkt sich den Zeitpunkt des letzten übernommenen Samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingClock {
    interval_ms: f64,
    baseline_ms: TimestampMs,
}

impl SamplingClock {
    /// Erstellt eine Uhr mit festem Mindestabstand.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            baseline_ms: 0.0,
        }
    }

    /// Setzt die Basis auf `now` (Touch-Down oder übernommener Sample).
    pub fn reset(&mut self, now: TimestampMs) {
        self.baseline_ms = now;
    }

    /// Prüft, ob seit der Basis mindestens ein Intervall vergangen ist.
    /// Bei `true` wird die Basis auf `now` vorgerückt.
    pub fn try_sample(&mut self, now: TimestampMs) -> bool {
        if now - self.baseline_ms >= self.interval_ms {
            self.baseline_ms = now;
            true
        } else {
            false
        }
    }

    /// Mindestabstand in ms.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_only_after_interval() {
        let mut clock = SamplingClock::new(1000.0 / 30.0);
        clock.reset(0.0);
        assert!(!clock.try_sample(10.0));
        assert!(!clock.try_sample(30.0));
        assert!(clock.try_sample(40.0));
        // Basis liegt jetzt bei 40
        assert!(!clock.try_sample(70.0));
        assert!(clock.try_sample(73.4));
    }
}

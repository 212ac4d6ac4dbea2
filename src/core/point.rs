//! Punkt- und Pfad-Typen der drei Koordinatenräume.
//!
//! - Geräte-Raum: Pixel der Zeichenfläche, Ursprung oben links, Y wächst nach unten
//!   (`RawPath`, roh als `Vec2`).
//! - Lokaler Raum: Pixel relativ zum Ursprung (Feldmitte unten), Y wächst zum
//!   gegnerischen Feldende (`LocalPoint`).
//! - Feld-Raum: Yards relativ zum Ursprung (`FieldPoint`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Zeitstempel eines Eingabe-Events in Millisekunden.
pub type TimestampMs = f64;

/// Punkt relativ zum Ursprung, noch in Pixeln, Y-Achse bereits gespiegelt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPoint(pub Vec2);

impl LocalPoint {
    /// Horizontaler Versatz in Pixeln.
    pub fn x(&self) -> f32 {
        self.0.x
    }

    /// Vertikaler Versatz in Pixeln (positiv = vom Gerät weg).
    pub fn y(&self) -> f32 {
        self.0.y
    }
}

/// Punkt im Feld-Raum (Yards, Ursprung = Wurfmaschine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPoint {
    /// Seitlicher Abstand zur Feldmitte (Yards)
    pub x: f32,
    /// Abstand zur Grundlinie (Yards)
    pub y: f32,
}

impl FieldPoint {
    /// Erstellt einen Feldpunkt.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rundet beide Koordinaten auf `decimals` Nachkommastellen.
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            x: round_to(self.x, decimals),
            y: round_to(self.y, decimals),
        }
    }
}

/// Rundet einen Wert auf `decimals` Nachkommastellen.
pub fn round_to(value: f32, decimals: i32) -> f32 {
    let factor = 10f64.powi(decimals);
    ((value as f64 * factor).round() / factor) as f32
}

/// Roh aufgezeichneter Strich im Geräte-Raum (jedes Move-Event).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPath {
    points: Vec<Vec2>,
}

impl RawPath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt an.
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Verwirft alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Anzahl der Rohpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Letzter Punkt (aktuelle Fingerposition).
    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// Ein zeitlich abgetasteter Punkt samt Zeitstempel des Quell-Events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint {
    /// Position relativ zum Ursprung
    pub local: LocalPoint,
    /// Zeitstempel des Events, aus dem der Punkt stammt
    pub source_ms: TimestampMs,
}

/// Zeitlich ausgedünnter Pfad im lokalen Raum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledPath {
    samples: Vec<SampledPoint>,
}

impl SampledPath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Hängt einen Sample an.
    pub fn push(&mut self, local: LocalPoint, source_ms: TimestampMs) {
        self.samples.push(SampledPoint { local, source_ms });
    }

    /// Verwirft alle Samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Anzahl der Samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Gibt `true` zurück, wenn keine Samples vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read-only Sicht auf alle Samples.
    pub fn samples(&self) -> &[SampledPoint] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_to_three_decimals() {
        assert_relative_eq!(round_to(1.23456, 3), 1.235);
        assert_relative_eq!(round_to(-0.0004, 3), 0.0);
        assert_relative_eq!(round_to(112.5999, 3), 112.6);
    }

    #[test]
    fn raw_path_push_and_clear() {
        let mut path = RawPath::new();
        path.push(Vec2::new(1.0, 2.0));
        path.push(Vec2::new(3.0, 4.0));
        assert_eq!(path.len(), 2);
        assert_eq!(path.last(), Some(Vec2::new(3.0, 4.0)));
        path.clear();
        assert!(path.is_empty());
    }
}

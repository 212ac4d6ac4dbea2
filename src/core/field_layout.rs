//! Markierungs-Geometrie des Spielfelds (Yardlinien, Hash-Marks, Beschriftung).
//!
//! Reine Daten für den Renderer; nutzt dieselbe gerundete Reihenanzahl wie
//! [`FieldTransform`], damit Linien und Koordinaten übereinstimmen.

use super::field::{FieldDimensions, FieldTransform};
use glam::Vec2;

/// Abstand der Rasen-Streifen in Pixeln.
pub const STRIPE_PERIOD_PX: f32 = 80.0;
/// Breite eines dunklen Rasen-Streifens in Pixeln.
pub const STRIPE_WIDTH_PX: f32 = 40.0;
/// Halbe Länge einer Hash-Markierung in Pixeln.
pub const HASH_HALF_LENGTH_PX: f32 = 5.0;
/// Hash-Markierungen pro innerer Yardlinie.
pub const HASH_MARKS_PER_LINE: u32 = 9;

/// Achsenparalleles Rechteck im Geräte-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub min: Vec2,
    pub max: Vec2,
}

/// Beschriftung einer Yardlinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YardLabel {
    /// Angezeigte Yard-Zahl (10, 20, …)
    pub yards: u32,
    /// Ankerpunkt (mittig) im Geräte-Raum
    pub anchor: Vec2,
}

/// Abgeleitete Markierungen für eine konkrete Flächengröße.
#[derive(Debug, Clone)]
pub struct FieldLayout {
    size: Vec2,
    segment_count: u32,
    row_height: f32,
}

impl FieldLayout {
    /// Erstellt das Layout passend zu einer Transformation.
    pub fn from_transform(transform: &FieldTransform) -> Self {
        Self::new(transform.surface_size(), transform.dimensions())
    }

    /// Erstellt das Layout für Flächengröße und Feldmaße.
    pub fn new(size: Vec2, dimensions: FieldDimensions) -> Self {
        let segment_count = dimensions.segment_count();
        Self {
            size,
            segment_count,
            row_height: size.y / segment_count as f32,
        }
    }

    /// Dunkle Rasen-Streifen über die volle Höhe.
    pub fn stripes(&self) -> Vec<PixelRect> {
        let count = (self.size.x / STRIPE_PERIOD_PX).ceil().max(0.0) as u32;
        (0..count)
            .map(|i| {
                let x = i as f32 * STRIPE_PERIOD_PX;
                PixelRect {
                    min: Vec2::new(x, 0.0),
                    max: Vec2::new(x + STRIPE_WIDTH_PX, self.size.y),
                }
            })
            .collect()
    }

    /// Y-Positionen aller Yardlinien (inkl. oberer und unterer Kante).
    pub fn yard_lines(&self) -> Vec<f32> {
        (0..=self.segment_count)
            .map(|i| i as f32 * self.row_height)
            .collect()
    }

    /// Hash-Markierungen auf den inneren Yardlinien als Start/End-Paare.
    pub fn hash_marks(&self) -> Vec<(Vec2, Vec2)> {
        let inner_lines = self.segment_count.saturating_sub(1);
        let mut marks = Vec::with_capacity((inner_lines * HASH_MARKS_PER_LINE) as usize);
        for row in 0..inner_lines {
            let y = (row + 1) as f32 * self.row_height;
            for col in 0..HASH_MARKS_PER_LINE {
                let x = self.size.x * (col + 1) as f32 / 10.0;
                marks.push((
                    Vec2::new(x, y - HASH_HALF_LENGTH_PX),
                    Vec2::new(x, y + HASH_HALF_LENGTH_PX),
                ));
            }
        }
        marks
    }

    /// Yard-Zahlen von unten nach oben (10, 20, …).
    pub fn yard_labels(&self) -> Vec<YardLabel> {
        (1..=self.segment_count)
            .map(|i| {
                let yards = i * FieldDimensions::YARDS_PER_ROW as u32;
                let y = self.size.y - yards as f32 / FieldDimensions::YARDS_PER_ROW * self.row_height;
                YardLabel {
                    yards,
                    anchor: Vec2::new(self.size.x / 4.0, y - 10.0),
                }
            })
            .collect()
    }

    /// Abgedunkelte Bänder der obersten und untersten Reihe.
    pub fn end_zones(&self) -> [PixelRect; 2] {
        [
            PixelRect {
                min: Vec2::ZERO,
                max: Vec2::new(self.size.x, self.row_height),
            },
            PixelRect {
                min: Vec2::new(0.0, self.size.y - self.row_height),
                max: self.size,
            },
        ]
    }

    /// Position der Wurfmaschinen-Markierung (knapp über dem Ursprung).
    pub fn launcher_marker(&self) -> Vec2 {
        Vec2::new(self.size.x / 2.0, self.size.y - 8.0)
    }
}

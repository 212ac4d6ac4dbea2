//! Spielfeld-Maße und Transformation Geräte-Pixel → Feld-Yards.

use super::point::{FieldPoint, LocalPoint};
use glam::Vec2;

/// Nominelle Feldmaße in Yards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDimensions {
    /// Feldbreite (Seitenlinie zu Seitenlinie)
    pub width_yards: f32,
    /// Dargestellte Feldlänge
    pub length_yards: f32,
}

impl FieldDimensions {
    /// Yards pro Yardlinien-Reihe.
    pub const YARDS_PER_ROW: f32 = 10.0;

    /// Erstellt Feldmaße.
    pub fn new(width_yards: f32, length_yards: f32) -> Self {
        Self {
            width_yards,
            length_yards,
        }
    }

    /// Anzahl der Reihen zwischen den Yardlinien (`max(1, round(FL / 10))`).
    ///
    /// Ist `FL` kein Vielfaches von 10, weicht die effektive Reihenbreite von
    /// exakt 10 Yards ab; Rendering und Transformation nutzen dieselbe Rundung.
    pub fn segment_count(&self) -> u32 {
        (self.length_yards / Self::YARDS_PER_ROW).round().max(1.0) as u32
    }
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self::new(53.3, 60.0)
    }
}

/// Abbildung zwischen Geräte-, lokalem und Feld-Raum für eine Flächengröße.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTransform {
    surface_size: Vec2,
    origin: Vec2,
    dimensions: FieldDimensions,
    x_scale: f32,
    y_scale: f32,
}

impl FieldTransform {
    /// Berechnet Ursprung und Skalierung aus der Pixelgröße der Zeichenfläche.
    ///
    /// Ursprung = (Breite / 2, Höhe), also Feldmitte an der unteren Kante.
    pub fn new(surface_size: Vec2, dimensions: FieldDimensions) -> Self {
        let row_height = surface_size.y / dimensions.segment_count() as f32;
        let x_scale = if dimensions.width_yards > 0.0 {
            surface_size.x / dimensions.width_yards
        } else {
            0.0
        };
        let y_scale = if row_height == 0.0 {
            0.0
        } else {
            row_height / FieldDimensions::YARDS_PER_ROW
        };

        Self {
            surface_size,
            origin: Vec2::new(surface_size.x / 2.0, surface_size.y),
            dimensions,
            x_scale,
            y_scale,
        }
    }

    /// Ursprung im Geräte-Raum.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Pixelgröße der Zeichenfläche.
    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Zugrunde liegende Feldmaße.
    pub fn dimensions(&self) -> FieldDimensions {
        self.dimensions
    }

    /// Pixel pro Yard entlang X.
    pub fn x_scale(&self) -> f32 {
        self.x_scale
    }

    /// Pixel pro Yard entlang Y.
    pub fn y_scale(&self) -> f32 {
        self.y_scale
    }

    /// Höhe einer Yardlinien-Reihe in Pixeln.
    pub fn row_height_px(&self) -> f32 {
        self.surface_size.y / self.dimensions.segment_count() as f32
    }

    /// Geräte-Pixel → Versatz relativ zum Ursprung (Y gespiegelt).
    pub fn device_to_local(&self, device: Vec2) -> LocalPoint {
        LocalPoint(Vec2::new(
            device.x - self.origin.x,
            self.origin.y - device.y,
        ))
    }

    /// Umkehrung von [`Self::device_to_local`].
    pub fn local_to_device(&self, local: LocalPoint) -> Vec2 {
        Vec2::new(local.x() + self.origin.x, self.origin.y - local.y())
    }

    /// Lokaler Pixel-Versatz → Yards.
    ///
    /// `None` solange eine der Skalierungen 0 ist (Fläche noch nicht vermessen).
    pub fn local_to_field(&self, local: LocalPoint) -> Option<FieldPoint> {
        if self.x_scale == 0.0 || self.y_scale == 0.0 {
            return None;
        }
        Some(FieldPoint::new(
            local.x() / self.x_scale,
            local.y() / self.y_scale,
        ))
    }

    /// Yards → lokaler Pixel-Versatz.
    pub fn field_to_local(&self, field: FieldPoint) -> LocalPoint {
        LocalPoint(Vec2::new(field.x * self.x_scale, field.y * self.y_scale))
    }
}

//! Finalisierte Route im Feld-Raum und ihr Diagnose-Datensatz.

use super::field::FieldTransform;
use super::point::{FieldPoint, SampledPath};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nachkommastellen der ausgegebenen Routenpunkte.
pub const OUTPUT_DECIMALS: i32 = 3;

/// Bestätigte Route in Yards, gerundet auf [`OUTPUT_DECIMALS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRoute {
    /// Geordnete Routenpunkte
    pub points: Vec<FieldPoint>,
    /// Exakter Loslass-Punkt (letzter Eintrag von `points`)
    pub final_point: Option<FieldPoint>,
}

impl FieldRoute {
    /// Wandelt einen abgetasteten Pfad Punkt für Punkt in Yards um.
    ///
    /// Punkte, die nicht transformiert werden können (Skalierung 0), entfallen.
    pub fn from_samples(samples: &SampledPath, transform: &FieldTransform) -> Self {
        let points: Vec<FieldPoint> = samples
            .samples()
            .iter()
            .filter_map(|s| transform.local_to_field(s.local))
            .map(|p| p.rounded(OUTPUT_DECIMALS))
            .collect();
        let final_point = points.last().copied();
        Self {
            points,
            final_point,
        }
    }

    /// Anzahl der Routenpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Route keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn fmt_point(f: &mut fmt::Formatter<'_>, p: &FieldPoint) -> fmt::Result {
    write!(f, "({:.3}, {:.3})", p.x, p.y)
}

/// Mehrzeiliger Diagnose-Datensatz, wie er an die Maschine „gesendet“ wird.
impl fmt::Display for FieldRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route (local yards, origin at JUGS center x=0, y=0):")?;
        write!(f, "Points ({}): [", self.points.len())?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt_point(f, p)?;
        }
        writeln!(f, "]")?;
        f.write_str("Final: ")?;
        match &self.final_point {
            Some(p) => fmt_point(f, p),
            None => f.write_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldDimensions, LocalPoint};
    use glam::Vec2;

    fn transform() -> FieldTransform {
        // 533 x 600 px → 10 px pro Yard in beide Richtungen
        FieldTransform::new(Vec2::new(533.0, 600.0), FieldDimensions::default())
    }

    #[test]
    fn from_samples_scales_and_rounds() {
        let mut samples = SampledPath::new();
        samples.push(LocalPoint(Vec2::new(0.0, 0.0)), 0.0);
        samples.push(LocalPoint(Vec2::new(12.34567, 100.0)), 40.0);
        samples.push(LocalPoint(Vec2::new(-50.0, 255.55)), 80.0);

        let route = FieldRoute::from_samples(&samples, &transform());

        assert_eq!(route.len(), 3);
        assert_eq!(route.points[1], FieldPoint::new(1.235, 10.0));
        assert_eq!(route.points[2], FieldPoint::new(-5.0, 25.555));
        assert_eq!(route.final_point, Some(route.points[2]));
    }

    #[test]
    fn unmeasured_transform_drops_points() {
        let mut samples = SampledPath::new();
        samples.push(LocalPoint(Vec2::new(3.0, 4.0)), 0.0);
        let t = FieldTransform::new(Vec2::ZERO, FieldDimensions::default());

        let route = FieldRoute::from_samples(&samples, &t);

        assert!(route.is_empty());
        assert_eq!(route.final_point, None);
    }

    #[test]
    fn display_matches_record_format() {
        let route = FieldRoute {
            points: vec![FieldPoint::new(0.0, 10.0), FieldPoint::new(-2.5, 12.125)],
            final_point: Some(FieldPoint::new(-2.5, 12.125)),
        };
        assert_eq!(
            route.to_string(),
            "Route (local yards, origin at JUGS center x=0, y=0):\n\
             Points (2): [(0.000, 10.000), (-2.500, 12.125)]\n\
             Final: (-2.500, 12.125)"
        );
    }

    #[test]
    fn display_without_points() {
        let route = FieldRoute {
            points: Vec::new(),
            final_point: None,
        };
        assert!(route.to_string().ends_with("Points (0): []\nFinal: N/A"));
    }
}

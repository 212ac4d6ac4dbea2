//! Rein-mathematische Geometrie-Hilfen für Freihand-Striche.

use glam::Vec2;
use std::fmt;

/// Unterhalb dieses Nenners gelten zwei Segmente als (nahezu) parallel.
pub const PARALLEL_TOLERANCE: f32 = 1e-4;
/// Kürzere Pfade werden nie als selbstschneidend gemeldet.
pub const SELF_INTERSECTION_MIN_POINTS: usize = 20;
/// Anzahl der jüngsten Punkte, die vom Schnitt-Vergleich ausgenommen sind.
pub const SELF_INTERSECTION_RECENT_EXCLUSION: usize = 15;

/// Prüft, ob das Segment `p1–p2` das Segment `p3–p4` schneidet.
///
/// Parametrische Geraden-Schnittberechnung. Berührungen an den Endpunkten
/// (`ua` oder `ub` exakt 0 bzw. 1) zählen als Schnitt; nahezu parallele
/// Segmente (`|d| < PARALLEL_TOLERANCE`) nie.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let denominator = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denominator.abs() < PARALLEL_TOLERANCE {
        return false;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denominator;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denominator;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// Prüft, ob das jüngste Segment des Pfads ein ausreichend altes Segment kreuzt.
///
/// Verwendet die Standard-Schwellen (`SELF_INTERSECTION_MIN_POINTS`,
/// `SELF_INTERSECTION_RECENT_EXCLUSION`).
pub fn path_self_intersects(path: &[Vec2]) -> bool {
    path_self_intersects_with(
        path,
        SELF_INTERSECTION_MIN_POINTS,
        SELF_INTERSECTION_RECENT_EXCLUSION,
    )
}

/// Inkrementeller Selbstschnitt-Test mit konfigurierbaren Schwellen.
///
/// Verglichen wird nur das Segment `path[n-2] → path[n-1]` mit allen Segmenten
/// `path[i] → path[i+1]` für `i < n - recent_exclusion`. Der Rest des Pfads wurde
/// bereits bei früheren Aufrufen geprüft.
pub fn path_self_intersects_with(
    path: &[Vec2],
    min_points: usize,
    recent_exclusion: usize,
) -> bool {
    match path.split_last() {
        Some((&newest, head)) => {
            extension_self_intersects(head, newest, min_points, recent_exclusion)
        }
        None => false,
    }
}

/// Wie [`path_self_intersects_with`], aber für den um `next` verlängerten Pfad,
/// ohne `next` vorher anzuhängen.
pub fn extension_self_intersects(
    path: &[Vec2],
    next: Vec2,
    min_points: usize,
    recent_exclusion: usize,
) -> bool {
    let n = path.len() + 1;
    if n < min_points.max(2) {
        return false;
    }
    let Some(&newest_start) = path.last() else {
        return false;
    };
    let compare_until = n.saturating_sub(recent_exclusion);

    path.windows(2)
        .take(compare_until)
        .any(|old| segments_intersect(newest_start, next, old[0], old[1]))
}

/// Ein Zeichenbefehl des Kurven-Deskriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Stift an Position absetzen
    MoveTo(Vec2),
    /// Gerade Linie zur Position ziehen
    LineTo(Vec2),
}

/// Renderbarer Move-/Line-To-Kurvenzug.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvePath {
    commands: Vec<PathCommand>,
}

impl CurvePath {
    /// Alle Befehle in Zeichenreihenfolge.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Gibt `true` zurück, wenn der Deskriptor leer ist.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Liefert die Stützpunkte als zusammenhängenden Polygonzug.
    pub fn polyline(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            })
            .collect()
    }
}

/// SVG-Pfaddaten (`M x y L x y …`).
impl fmt::Display for CurvePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
            }
        }
        Ok(())
    }
}

/// Wandelt eine Punktfolge in einen Move-then-Line-To-Kurvenzug um.
pub fn path_to_curve(points: &[Vec2]) -> CurvePath {
    let Some((&first, rest)) = points.split_first() else {
        return CurvePath::default();
    };

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(first));
    commands.extend(rest.iter().map(|&p| PathCommand::LineTo(p)));
    CurvePath { commands }
}

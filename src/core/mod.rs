//! Core-Domänentypen: Punkte, Pfade, Geometrie, Feld-Transformation, Route.

pub mod field;
pub mod field_layout;
/// Geometrie-Hilfen für Freihand-Striche
///
/// Segment-Schnitt, inkrementeller Selbstschnitt-Test und
/// Umwandlung in einen Move/Line-To-Kurvenzug.
pub mod geometry;
pub mod point;
pub mod route;

pub use field::{FieldDimensions, FieldTransform};
pub use field_layout::{FieldLayout, PixelRect, YardLabel};
pub use geometry::{
    extension_self_intersects, path_self_intersects, path_self_intersects_with, path_to_curve,
    segments_intersect, CurvePath, PathCommand,
};
pub use point::{
    round_to, FieldPoint, LocalPoint, RawPath, SampledPath, SampledPoint, TimestampMs,
};
pub use route::{FieldRoute, OUTPUT_DECIMALS};

//! Zeichnet Spielfeld, Routen und Markierungen mit dem egui-Painter.

use crate::app::CaptureSession;
use crate::core::{path_to_curve, FieldLayout, PixelRect, RawPath};
use egui::{Color32, Pos2, Rect, Stroke};
use glam::Vec2;

const GRASS: Color32 = Color32::from_rgb(46, 125, 50);
const GRASS_DARK: Color32 = Color32::from_rgb(39, 110, 44);
const END_ZONE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 40);
const LINE: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 200);
const ROUTE: Color32 = Color32::from_rgb(255, 215, 0);
const CONFIRMED_ROUTE: Color32 = Color32::from_rgb(255, 235, 130);
const START_MARKER: Color32 = Color32::from_rgb(76, 175, 80);
const END_MARKER: Color32 = Color32::from_rgb(244, 67, 54);
const LAUNCHER: Color32 = Color32::from_rgb(255, 215, 0);

const ROUTE_WIDTH: f32 = 4.0;
const MARKER_RADIUS: f32 = 7.0;

/// Rendert das Feld samt laufendem Strich und bestätigten Routen in `rect`.
pub fn paint_field(painter: &egui::Painter, rect: Rect, capture: &CaptureSession) {
    let to_screen = |p: Vec2| Pos2::new(rect.min.x + p.x, rect.min.y + p.y);
    let to_rect =
        |r: &PixelRect| Rect::from_min_max(to_screen(r.min), to_screen(r.max)).intersect(rect);

    painter.rect_filled(rect, 0.0, GRASS);

    let Some(transform) = capture.transform() else {
        return;
    };
    let layout = FieldLayout::from_transform(transform);

    for stripe in layout.stripes() {
        painter.rect_filled(to_rect(&stripe), 0.0, GRASS_DARK);
    }
    for zone in layout.end_zones() {
        painter.rect_filled(to_rect(&zone), 0.0, END_ZONE);
    }

    let line_stroke = Stroke::new(2.0, LINE);
    for y in layout.yard_lines() {
        painter.line_segment(
            [to_screen(Vec2::new(0.0, y)), to_screen(Vec2::new(rect.width(), y))],
            line_stroke,
        );
    }
    let hash_stroke = Stroke::new(1.0, LINE);
    for (a, b) in layout.hash_marks() {
        painter.line_segment([to_screen(a), to_screen(b)], hash_stroke);
    }
    for label in layout.yard_labels() {
        painter.text(
            to_screen(label.anchor),
            egui::Align2::CENTER_CENTER,
            label.yards.to_string(),
            egui::FontId::proportional(16.0),
            LINE,
        );
    }

    painter.circle_filled(to_screen(layout.launcher_marker()), 8.0, LAUNCHER);

    for route in capture.confirmed_routes() {
        paint_route(painter, route, CONFIRMED_ROUTE, &to_screen);
    }
    paint_route(painter, capture.raw_path(), ROUTE, &to_screen);
}

fn paint_route(
    painter: &egui::Painter,
    path: &RawPath,
    color: Color32,
    to_screen: &impl Fn(Vec2) -> Pos2,
) {
    let curve = path_to_curve(path.points());
    if curve.is_empty() {
        return;
    }
    let points: Vec<Pos2> = curve.polyline().into_iter().map(to_screen).collect();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return;
    };
    let has_segments = points.len() > 1;

    if has_segments {
        painter.add(egui::Shape::line(points, Stroke::new(ROUTE_WIDTH, color)));
    }
    painter.circle_filled(first, MARKER_RADIUS, START_MARKER);
    if has_segments {
        painter.circle_filled(last, MARKER_RADIUS, END_MARKER);
    }
}

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use jugs_route_designer::{
    path_self_intersects, CaptureSession, FieldDimensions, FieldRoute, FieldTransform,
    RouteOptions, SampledPath,
};
use std::hint::black_box;

/// Spirale ohne Selbstschnitt: jeder Test läuft über alle alten Segmente.
fn build_spiral(point_count: usize) -> Vec<Vec2> {
    (0..point_count)
        .map(|i| {
            let t = i as f32 * 0.05;
            let r = 20.0 + t * 8.0;
            Vec2::new(300.0 + r * t.cos(), 300.0 + r * t.sin())
        })
        .collect()
}

fn bench_self_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_intersection");

    for &point_count in &[100usize, 1_000usize] {
        let spiral = build_spiral(point_count);
        group.bench_with_input(
            BenchmarkId::new("newest_segment", point_count),
            &spiral,
            |b, path| b.iter(|| black_box(path_self_intersects(black_box(path)))),
        );
    }

    group.finish();
}

fn bench_capture_stroke(c: &mut Criterion) {
    let spiral = build_spiral(600);
    let options = RouteOptions::default();

    c.bench_function("capture_full_stroke_600", |b| {
        b.iter(|| {
            let mut session = CaptureSession::new(&options);
            session.layout_known(Vec2::new(600.0, 900.0));
            session.touch_down(spiral[0], 0.0);
            for (i, point) in spiral.iter().enumerate().skip(1) {
                session.touch_move(*point, i as f64 * 8.0);
            }
            session.touch_release(spiral.len() as f64 * 8.0);
            black_box(session.confirm())
        })
    });
}

fn bench_transform(c: &mut Criterion) {
    let transform = FieldTransform::new(Vec2::new(600.0, 900.0), FieldDimensions::default());
    let mut samples = SampledPath::new();
    for (i, point) in build_spiral(1_000).into_iter().enumerate() {
        samples.push(transform.device_to_local(point), i as f64 * 33.4);
    }

    c.bench_function("field_route_from_1000_samples", |b| {
        b.iter(|| black_box(FieldRoute::from_samples(black_box(&samples), &transform)))
    });
}

criterion_group!(
    benches,
    bench_self_intersection,
    bench_capture_stroke,
    bench_transform
);
criterion_main!(benches);

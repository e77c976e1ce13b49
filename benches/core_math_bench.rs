use criterion::{Criterion, criterion_group, criterion_main};
use donut_chart::core::{BoundingBox, DonutLayout, Point, create_donut_path, create_linear_scale};
use donut_chart::interaction::{
    Element, ListenerRegistry, PointerEvent, Surface, WheelEvent, ZoomPanConfig, add_zoom_pan,
};
use std::hint::black_box;

fn bench_donut_path(c: &mut Criterion) {
    c.bench_function("donut_path_single_segment", |b| {
        b.iter(|| {
            let _ = create_donut_path(
                black_box(150.0),
                black_box(150.0),
                black_box(120.0),
                black_box(84.0),
                black_box(37.5),
                black_box(211.25),
            );
        })
    });
}

fn bench_donut_layout_1k(c: &mut Criterion) {
    let layout = DonutLayout::new(Point::new(400.0, 400.0), 300.0, 0.7).expect("valid layout");
    let values: Vec<f64> = (0..1_000).map(|i| 1.0 + (i % 17) as f64).collect();

    c.bench_function("donut_layout_segments_1k", |b| {
        b.iter(|| {
            let segments = layout
                .segments(black_box(&values))
                .expect("valid values");
            let _ = DonutLayout::segment_at(&segments, black_box(Point::new(610.0, 380.0)));
        })
    });
}

fn bench_linear_scale(c: &mut Criterion) {
    let scale = create_linear_scale(0.0, 10_000.0, 0.0, 1_920.0);

    c.bench_function("linear_scale_map", |b| {
        b.iter(|| {
            let _ = scale(black_box(4_321.123));
        })
    });
}

fn bench_wheel_and_drag(c: &mut Criterion) {
    let mut surface = Surface::new(
        BoundingBox::new(0.0, 0.0, 1_600.0, 900.0),
        Element::new("g"),
        ListenerRegistry::new(),
    );
    let mut zoom_pan = add_zoom_pan(Some(&mut surface), ZoomPanConfig::default())
        .expect("valid config")
        .expect("surface present");

    c.bench_function("zoom_pan_wheel_then_drag", |b| {
        b.iter(|| {
            zoom_pan.wheel(&mut surface, &WheelEvent::new(800.0, 450.0, black_box(-1.0)));
            zoom_pan.pointer_down(&mut surface, &PointerEvent::new(800.0, 450.0));
            zoom_pan.pointer_move(&mut surface, &PointerEvent::new(black_box(820.0), 440.0));
            zoom_pan.pointer_up(&mut surface);
            zoom_pan.reset(&mut surface);
        })
    });
}

criterion_group!(
    benches,
    bench_donut_path,
    bench_donut_layout_1k,
    bench_linear_scale,
    bench_wheel_and_drag
);
criterion_main!(benches);

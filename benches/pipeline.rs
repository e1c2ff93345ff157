//! Benchmarks for the icon pipeline.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pwa_icons::geometry::{arc_points, spiral_points, ARC_STEP_DEGREES};
use pwa_icons::{encode_png, plan, GeneratorConfig, IconKind, Point, Theme};

// -- Geometry benchmarks --

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let center = Point::new(256.0, 256.0);

    group.bench_function("spiral_points", |b| {
        b.iter(|| spiral_points(black_box(center), 0.0, 40.0, 160.0, 0.75, 20))
    });

    group.bench_function("arc_points_full_turn", |b| {
        b.iter(|| arc_points(black_box(center), 150.0, 0.0, 360.0, ARC_STEP_DEGREES))
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let theme = Theme::default();

    for size in [72, 192, 512] {
        group.bench_function(format!("primary_{}", size), |b| {
            b.iter(|| IconKind::Primary.render(black_box(size), &theme, "FF").unwrap())
        });
    }

    for kind in IconKind::SHORTCUTS {
        group.bench_function(format!("shortcut_{}", kind.slug()), |b| {
            b.iter(|| kind.render(black_box(96), &theme, "FF").unwrap())
        });
    }

    group.finish();
}

// -- Full batch without touching disk --

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let config = GeneratorConfig::default();
    let theme = config.theme.resolved();
    let jobs = plan(&config);
    group.sample_size(10);

    group.bench_function("render_all", |b| {
        b.iter(|| {
            for job in &jobs {
                black_box(job.kind.render(job.size, &theme, &config.label).unwrap());
            }
        })
    });

    group.bench_function("render_and_encode_all", |b| {
        b.iter(|| {
            for job in &jobs {
                let canvas = job.kind.render(job.size, &theme, &config.label).unwrap();
                black_box(encode_png(&canvas, Path::new(&job.file_name)).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_rendering, bench_batch);
criterion_main!(benches);

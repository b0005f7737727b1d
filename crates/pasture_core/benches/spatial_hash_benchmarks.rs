use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pasture_core::spatial_hash::SpatialHash;
use pasture_data::Vec2;

fn grid_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 100) as f64 * 30.0;
            let y = (i / 100) as f64 * 30.0;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_rebuild(c: &mut Criterion) {
    let points = grid_points(1000);

    c.bench_function("spatial_hash_rebuild_1000", |b| {
        let mut spatial = SpatialHash::new(150.0, 3000.0, 3000.0);
        b.iter(|| {
            spatial.rebuild(&points);
            black_box(spatial.len())
        })
    });
}

fn bench_query(c: &mut Criterion) {
    let points = grid_points(1000);
    let mut spatial = SpatialHash::new(150.0, 3000.0, 3000.0);
    spatial.rebuild(&points);

    c.bench_function("spatial_hash_query_300_radius", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(1500.0, 1500.0, 300.0, &mut results);
            black_box(results.len())
        })
    });

    c.bench_function("spatial_hash_query_15_radius", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(1500.0, 1500.0, 15.0, &mut results);
            black_box(results.len())
        })
    });
}

criterion_group!(benches, bench_rebuild, bench_query);
criterion_main!(benches);

// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use regionmap_geometry::{
    Feature, FeatureSet, Geometry, Polygon, compute_bounds, feature_centroid,
    parse_feature_collection,
};
use serde_json::Map;

/// A `side` x `side` grid of unit cells, each a jagged polygon with `verts`
/// outer vertices and a small square hole.
fn grid(side: usize, verts: usize) -> Vec<Feature> {
    let mut features = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let (x0, y0) = (col as f64, row as f64);
            let outer: Vec<Point> = (0..verts)
                .map(|i| {
                    let a = i as f64 / verts as f64 * core::f64::consts::TAU;
                    let r = if i % 2 == 0 { 0.5 } else { 0.42 };
                    Point::new(x0 + 0.5 + r * a.cos(), y0 + 0.5 + r * a.sin())
                })
                .collect();
            let hole = vec![
                Point::new(x0 + 0.45, y0 + 0.45),
                Point::new(x0 + 0.55, y0 + 0.45),
                Point::new(x0 + 0.55, y0 + 0.55),
                Point::new(x0 + 0.45, y0 + 0.55),
            ];
            features.push(Feature::new(
                Geometry::Polygon(Polygon::new(vec![outer, hole])),
                Map::new(),
            ));
        }
    }
    features
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/hit_test");

    // Worst case probes the last cell, so every earlier feature is rejected first.
    for side in [8usize, 32, 64] {
        let set = FeatureSet::new(grid(side, 64));
        let last = Point::new(side as f64 - 0.5, side as f64 - 0.2);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("last_cell", side), &set, |b, set| {
            b.iter(|| black_box(set.hit_test(black_box(last))));
        });
        group.bench_with_input(BenchmarkId::new("miss", side), &set, |b, set| {
            b.iter(|| black_box(set.hit_test(black_box(Point::new(-5.0, -5.0)))));
        });
    }

    group.finish();
}

fn bench_bounds_and_centroids(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/precompute");

    for side in [16usize, 64] {
        let features = grid(side, 128);
        group.throughput(Throughput::Elements((side * side * 132) as u64));
        group.bench_with_input(BenchmarkId::new("bounds", side), &features, |b, f| {
            b.iter(|| black_box(compute_bounds(f)));
        });
        group.bench_with_input(BenchmarkId::new("centroids", side), &features, |b, f| {
            b.iter(|| {
                for feature in f {
                    black_box(feature_centroid(feature));
                }
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/decode");

    let side = 32;
    let mut json = String::from(r#"{"type":"FeatureCollection","features":["#);
    for i in 0..side * side {
        if i > 0 {
            json.push(',');
        }
        let (x, y) = ((i % side) as f64, (i / side) as f64);
        json.push_str(&format!(
            r#"{{"type":"Feature","properties":{{"name":"cell {i}"}},"geometry":{{"type":"Polygon","coordinates":[[[{x},{y}],[{x1},{y}],[{x1},{y1}],[{x},{y1}],[{x},{y}]]]}}}}"#,
            x1 = x + 1.0,
            y1 = y + 1.0,
        ));
    }
    json.push_str("]}");

    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("feature_collection_1024", |b| {
        b.iter(|| black_box(parse_feature_collection(black_box(&json))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hit_test,
    bench_bounds_and_centroids,
    bench_decode
);
criterion_main!(benches);

//! Criterion benchmarks for station navigation queries.
//!
//! Every query scans all stations on all lines, so these track how the
//! linear scans scale with the built-in 74-station map.
//!
//! Run with: cargo bench -p simulation --bench navigator_bench

use bevy::math::Vec2;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::navigator::{
    haversine_km, nearest_station_in_direction, nearest_station_to_coordinate, station_at_point,
    Direction, StationLocation,
};
use simulation::routes::{RouteRegistry, StationKey};

fn bench_directional(c: &mut Criterion) {
    let registry = RouteRegistry::toronto().expect("built-in routes are valid");
    let origin = StationKey::new("Yonge-University", "Bloor-Yonge");

    let mut group = c.benchmark_group("navigator_direction");
    for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        group.bench_function(direction.label(), |b| {
            b.iter(|| {
                black_box(nearest_station_in_direction(
                    &registry,
                    black_box(&origin),
                    direction,
                ))
            });
        });
    }
    group.finish();

    c.bench_function("navigator_hit_test", |b| {
        b.iter(|| black_box(station_at_point(&registry, black_box(Vec2::new(800.0, 268.0)), 6.0)));
    });
}

fn bench_geographic(c: &mut Criterion) {
    let registry = RouteRegistry::toronto().expect("built-in routes are valid");
    // Spread the stations over a grid of coordinates around downtown.
    let locations: Vec<StationLocation> = registry
        .iter_stations()
        .enumerate()
        .map(|(i, s)| StationLocation {
            key: s.key(),
            latitude: 43.60 + (i / 10) as f64 * 0.02,
            longitude: -79.55 + (i % 10) as f64 * 0.03,
        })
        .collect();

    c.bench_function("haversine_km", |b| {
        b.iter(|| {
            black_box(haversine_km(
                black_box(43.6453),
                black_box(-79.3806),
                black_box(43.7806),
                black_box(-79.4160),
            ))
        });
    });

    c.bench_function("nearest_station_to_coordinate", |b| {
        b.iter(|| {
            black_box(nearest_station_to_coordinate(
                black_box(43.70),
                black_box(-79.40),
                &locations,
            ))
        });
    });
}

criterion_group!(benches, bench_directional, bench_geographic);
criterion_main!(benches);

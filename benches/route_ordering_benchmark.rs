use criterion::{black_box, criterion_group, criterion_main, Criterion};
use route_planner::{algorithms::order, Algorithm, DistanceMatrix, Location};

fn benchmark_route_ordering(c: &mut Criterion) {
    let locations = create_benchmark_locations();
    let matrix = DistanceMatrix::from_locations(&locations);
    let end = locations.len() - 1;

    // Benchmark matrix construction
    c.bench_function("distance_matrix_build", |b| {
        b.iter(|| DistanceMatrix::from_locations(black_box(&locations)))
    });

    c.bench_function("nearest_neighbor_order", |b| {
        b.iter(|| order(black_box(&matrix), 0, end, Algorithm::NearestNeighbor))
    });

    c.bench_function("dijkstra_order", |b| {
        b.iter(|| order(black_box(&matrix), 0, end, Algorithm::Dijkstra))
    });
}

// 100 points on a grid over eastern China
fn create_benchmark_locations() -> Vec<Location> {
    (0..100)
        .map(|i| {
            let lng = 110.0 + (i % 10) as f64 * 1.1;
            let lat = 25.0 + (i / 10) as f64 * 1.3;
            Location::new(lng, lat)
        })
        .collect()
}

criterion_group!(benches, benchmark_route_ordering);
criterion_main!(benches);

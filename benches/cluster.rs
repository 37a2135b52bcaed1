use criterion::{BenchmarkId, Criterion, criterion_main};
use pointcluster::{Crs, GridCluster, Point, PointFeature};
use pointcluster_fixtures::{SCENARIO_RESOLUTION, SCENARIO_SIZE, SIBERIA, scattered};

fn features(points: &[(f64, f64)], crs: Crs) -> Vec<PointFeature<usize>> {
    points
        .iter()
        .enumerate()
        .map(|(index, (x, y))| {
            PointFeature::new(Point::new(*x, *y, crs).expect("Must be finite"), index)
        })
        .collect()
}

fn scenario_benchmark(c: &mut Criterion) {
    let features = features(&SIBERIA, Crs::Wgs84);
    let cluster = GridCluster::new()
        .size(SCENARIO_SIZE)
        .resolution(SCENARIO_RESOLUTION)
        .crs(Crs::WebMercator);

    c.bench_function("cluster: siberia", |b| {
        b.iter(|| {
            let groups = cluster.cluster(&features).expect("Must cluster");
            assert_eq!(groups.len(), 4);
        })
    });
}

fn scale_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_scale");
    group.significance_level(0.1).sample_size(30);

    let cluster = GridCluster::new().size(10.0).crs(Crs::Cartesian);

    for count in [1_000, 10_000, 100_000] {
        let features = features(&scattered(count, 100_000.0, 1), Crs::Cartesian);

        group.bench_with_input(BenchmarkId::from_parameter(count), &features, |b, features| {
            b.iter(|| cluster.cluster(features).expect("Must cluster"))
        });
    }

    group.finish();
}

fn projection_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_projected");
    group.significance_level(0.1).sample_size(30);

    // Longitudes and latitudes within the Mercator band.
    let points = scattered(50_000, 160.0, 2)
        .into_iter()
        .map(|(x, y)| (x - 80.0, y / 2.0 - 40.0))
        .collect::<Vec<_>>();
    let features = features(&points, Crs::Wgs84);

    for crs in [Crs::WebMercator, Crs::EllipticalMercator] {
        let cluster = GridCluster::new().size(SCENARIO_SIZE).resolution(2_400.0).crs(crs);

        group.bench_function(format!("wgs84 -> {crs}"), |b| {
            b.iter(|| cluster.cluster(&features).expect("Must cluster"))
        });
    }

    group.finish();
}

criterion::criterion_group!(
    standard_benches,
    scenario_benchmark,
    scale_benchmark,
    projection_benchmark
);
criterion_main!(standard_benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::HashMap;
use std::sync::Arc;

use cropguide_ai::{CropCatalog, InferencePipeline, NearestCentroidModel, StandardScaler};
use cropguide_core::MeasurementVector;

fn pipeline(n_centroids: usize) -> InferencePipeline {
    let scaler = StandardScaler::new(
        [50.55, 53.36, 48.15, 25.62, 71.48, 6.47, 103.46],
        [36.91, 32.98, 50.64, 5.06, 22.26, 0.77, 54.95],
    )
    .unwrap();
    let centroids = (0..n_centroids)
        .map(|i| core::array::from_fn(|j| ((i * 7 + j) % 5) as f64 - 2.0))
        .collect();
    let model = NearestCentroidModel::new(centroids).unwrap();
    InferencePipeline::new(Arc::new(scaler), Arc::new(model), CropCatalog::builtin())
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let fields: HashMap<String, String> = [
        ("n", "90"),
        ("p", "42"),
        ("k", "43"),
        ("temperature", "20.9"),
        ("humidity", "82.0"),
        ("ph", "6.5"),
        ("rainfall", "202.9"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for n in [8usize, 64, 512] {
        let p = pipeline(n);
        group.bench_with_input(BenchmarkId::new("from_fields", n), &p, |b, p| {
            b.iter(|| p.classify(black_box(&fields)).unwrap())
        });

        let m = MeasurementVector::from_fields(&fields).unwrap();
        group.bench_with_input(BenchmarkId::new("measurements_only", n), &p, |b, p| {
            b.iter(|| p.classify_measurements(black_box(m)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);

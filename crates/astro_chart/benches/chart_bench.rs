use astro_chart::{ChartRequest, compute_chart};
use astro_core::Body;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn chart_bench(c: &mut Criterion) {
    let full = ChartRequest::new(1, 1, 2000, 12.0, 52.52, 13.40);
    let mut sun_only = full.clone();
    sun_only.bodies = vec![Body::Sun];

    let mut group = c.benchmark_group("chart");
    group.bench_function("full", |b| b.iter(|| compute_chart(black_box(&full))));
    group.bench_function("sun_only", |b| {
        b.iter(|| compute_chart(black_box(&sun_only)))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use proofchart_core::{compute_axis_spec, window_series, Sample, Series, VisibleChannels};

fn bench_axis(c: &mut Criterion) {
    let series: Series = (0..50_000i64)
        .map(|i| Sample::new(i * 1_000, Some(i as f64), if i % 3 == 0 { None } else { Some(20_000.0 - i as f64) }))
        .collect();
    let points = series.full_window().map(|w| window_series(&series, w)).unwrap_or_default();

    c.bench_function("compute_axis_spec_50k", |b| {
        b.iter_batched(
            || points.clone(),
            |p| { let _ = black_box(compute_axis_spec(&p, VisibleChannels::all())); },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_axis);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use proofchart_core::{window_series, Sample, Series, Window};

fn gen_series(n: usize) -> Series {
    (0..n as i64)
        .map(|i| {
            let p = (i as f64 * 0.01).sin() * 100.0 + 500.0;
            // every 17th disproven value missing
            let d = if i % 17 == 0 { None } else { Some(i as f64 * 0.1) };
            Sample::new(i * 60_000, Some(p), d)
        })
        .collect()
}

fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_series");
    for &n in &[10_000usize, 100_000usize] {
        let series = gen_series(n);
        let max = series.max_timestamp().unwrap_or(0);
        for &frac in &[10i64, 2, 1] {
            let window = Window::new(max - max / frac + 30_000, max - 30_000).expect("ordered");
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_1of{frac}")), &window, |b, &w| {
                b.iter(|| black_box(window_series(&series, w)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_window);
criterion_main!(benches);

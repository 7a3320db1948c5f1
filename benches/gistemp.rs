use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gistemp::{centered_rolling_mean, fit_lowess, SmoothingConfig};

fn annual_series() -> (Vec<f64>, Vec<f64>) {
    let years: Vec<f64> = (1880..2030).map(f64::from).collect();
    let means = years
        .iter()
        .map(|y| 0.008 * (y - 1950.0) + 0.15 * (y * 0.9).sin())
        .collect();
    (years, means)
}

fn bench_smoothing(c: &mut Criterion) {
    let (years, means) = annual_series();
    let config = SmoothingConfig::default();

    c.bench_function("lowess", |b| {
        b.iter(|| fit_lowess(black_box(&years), black_box(&means), &config))
    });
    c.bench_function("centered_rolling_mean", |b| {
        b.iter(|| centered_rolling_mean(black_box(&means), 11, 1))
    });
}

criterion_group!(benches, bench_smoothing);
criterion_main!(benches);

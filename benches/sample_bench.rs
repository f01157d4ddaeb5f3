use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use waveplot::{WaveParams, fourier_components, sample};

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let params = WaveParams::default();
    for &n in &[1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(sample(|x| params.eval(x), -10.0, 10.0, n)));
        });
    }
    group.finish();
}

fn bench_fourier(c: &mut Criterion) {
    let mut group = c.benchmark_group("fourier_components");
    let params = WaveParams::default();
    for &n in &[1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(fourier_components(|t| params.eval(t), 2.0, 40.0, n)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample, bench_fourier);
criterion_main!(benches);

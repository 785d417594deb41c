//! Benchmarks for cube synthesis and range-FFT extraction.
//!
//! Run with: cargo bench -p fmcw-mimo-sim --bench synthesis_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fmcw_mimo_core::{RadarGeometry, RangeSpectrumEstimator};
use fmcw_mimo_sim::{InterferingRadar, SignalSynthesizer, Target};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene_targets(count: usize) -> Vec<Target> {
    (0..count)
        .map(|i| Target::new([20.0 + 15.0 * i as f64, 0.0], 5.0 * i as f64, -10.0))
        .collect()
}

fn bench_cube_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube_synthesis");

    let geometry = RadarGeometry::automotive_77ghz();
    let samples_per_cube =
        geometry.num_samples() * geometry.tx().element_count() * geometry.rx().element_count();
    group.throughput(Throughput::Elements(samples_per_cube as u64));

    for num_targets in [1usize, 3, 10] {
        let synthesizer = SignalSynthesizer::new(geometry.clone(), 1.0e-3).unwrap();
        let targets = scene_targets(num_targets);
        let interferer =
            InterferingRadar::new(77.0e9, 1.0e9, 1.0e-3, 0.2, 2.0e6, 50.0e-6).unwrap();

        group.bench_with_input(
            BenchmarkId::new("targets", num_targets),
            &num_targets,
            |b, _| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| {
                    synthesizer.simulate(black_box(&targets), Some(&interferer), &mut rng)
                })
            },
        );
    }

    group.finish();
}

fn bench_range_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_fft");

    let geometry = RadarGeometry::automotive_77ghz();
    let synthesizer = SignalSynthesizer::new(geometry.clone(), 1.0e-3).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let (_, cube) = synthesizer.simulate(&scene_targets(3), None, &mut rng);
    let summed = cube.coherent_sum();

    let fs = geometry.rx().sample_rate_hz();
    let k = geometry.tx().chirp_slope();
    let mut estimator = RangeSpectrumEstimator::new(geometry.num_samples());

    group.throughput(Throughput::Elements(geometry.num_samples() as u64));
    group.bench_function("coherent_sum_profile", |b| {
        b.iter(|| estimator.estimate(black_box(&summed), fs, k).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_cube_synthesis, bench_range_fft);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use urn::{RngSource, SampleArgs, SamplePlan};

fn plan(args: SampleArgs) -> SamplePlan {
    args.plan().expect("benchmark request must be admissible")
}

fn bench_unweighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("unweighted");

    let sizes = [1_000u64, 10_000, 100_000];
    let k = 100.0;

    for &n in &sizes {
        let with = plan(SampleArgs::new(n as f64, k).with_replacement(true));
        group.bench_function(format!("with_replacement_n{}_k100", n), |b| {
            b.iter(|| {
                let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(1));
                black_box(with.draw(&mut source));
            })
        });

        let without = plan(SampleArgs::new(n as f64, k));
        group.bench_function(format!("without_replacement_n{}_k100", n), |b| {
            b.iter(|| {
                let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(1));
                black_box(without.draw(&mut source));
            })
        });
    }
    group.finish();
}

fn bench_weighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted");

    let sizes = [100usize, 1_000];
    let k = 100.0;

    for &n in &sizes {
        // Power-law weights keep the heavy-element count under the cap.
        let weights: Vec<f64> = (0..n).map(|i| 1.0 / (1.0 + i as f64).powi(2)).collect();

        let with = plan(
            SampleArgs::new(n as f64, k)
                .with_replacement(true)
                .with_weights(weights.clone()),
        );
        group.bench_function(format!("cdf_scan_n{}_k100", n), |b| {
            b.iter(|| {
                let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(1));
                black_box(with.draw(&mut source));
            })
        });

        let without = plan(SampleArgs::new(n as f64, k).with_weights(vec![1.0; n]));
        group.bench_function(format!("mass_removal_n{}_k100", n), |b| {
            b.iter(|| {
                let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(1));
                black_box(without.draw(&mut source));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unweighted, bench_weighted);
criterion_main!(benches);

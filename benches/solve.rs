use bkw_lab::config::Algorithm;
use bkw_lab::{solve, Config, Instance};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_lpn_standard(c: &mut Criterion) {
    let config = Config::lpn(8, 0.05, 2, 4, false).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let instance = Instance::new(&config, None, &mut rng).unwrap();
    let samples = instance.generate_samples(640, &mut rng);

    c.bench_function("solve lpn standard k=8 a=2 b=4", |bencher| {
        bencher.iter(|| {
            let mut sink = |_e: bkw_lab::LogEvent| {};
            black_box(solve(&config, black_box(&samples), None, &mut sink))
        });
    });
}

fn bench_lwe(c: &mut Criterion) {
    let config = Config::lwe(Algorithm::Lwe, 8, 31, 1.5, 2, 4).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let instance = Instance::new(&config, None, &mut rng).unwrap();
    let samples = instance.generate_samples(800, &mut rng);

    c.bench_function("solve lwe n=8 q=31 a=2 b=4", |bencher| {
        bencher.iter(|| {
            let mut sink = |_e: bkw_lab::LogEvent| {};
            black_box(solve(&config, black_box(&samples), None, &mut sink))
        });
    });
}

criterion_group!(benches, bench_lpn_standard, bench_lwe);
criterion_main!(benches);

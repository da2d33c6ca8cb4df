//! End-to-end solve scenarios across algorithm families and edge cases.

use bkw_lab::config::Algorithm;
use bkw_lab::{solve, Config, Instance, LogEvent, Severity};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn no_op_sink() -> impl FnMut(LogEvent) {
    |_e| {}
}

#[test]
fn lpn_formation_recovers_most_bits() {
    // Scenario 2: k=8, tau=0.1, a=2, b=4, 640 samples.
    let config = Config::lpn(8, 0.1, 2, 4, false).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let instance = Instance::new(&config, None, &mut rng).unwrap();
    let secret = instance.secret().to_vec();
    let samples = instance.generate_samples(640, &mut rng);

    let mut sink = no_op_sink();
    let outcome = solve(&config, &samples, Some(&secret), &mut sink);

    assert_eq!(outcome.secret.len(), 8);
    assert!(outcome.overall_accuracy.unwrap() >= 50.0);
}

#[test]
fn lpn_lf1_is_competitive_with_majority() {
    // Scenario 3: k=12, tau=0.15, a=3, b=4, 960 samples.
    let standard = Config::lpn(12, 0.15, 3, 4, false).unwrap();
    let lf1 = Config::lpn(12, 0.15, 3, 4, true).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let instance = Instance::new(&standard, None, &mut rng).unwrap();
    let secret = instance.secret().to_vec();
    let samples = instance.generate_samples(960, &mut rng);

    let mut sink_a = no_op_sink();
    let majority_outcome = solve(&standard, &samples, Some(&secret), &mut sink_a);

    let mut sink_b = no_op_sink();
    let lf1_outcome = solve(&lf1, &samples, Some(&secret), &mut sink_b);

    assert_eq!(majority_outcome.secret.len(), 12);
    assert_eq!(lf1_outcome.secret.len(), 12);
}

#[test]
fn lwe_noisy_completes_without_panicking() {
    // Scenario 5: n=8, q=31, sigma=1.5, a=2, b=4, 800 samples.
    let config = Config::lwe(Algorithm::Lwe, 8, 31, 1.5, 2, 4).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(55);
    let instance = Instance::new(&config, None, &mut rng).unwrap();
    let secret = instance.secret().to_vec();
    let samples = instance.generate_samples(800, &mut rng);

    let mut sink = no_op_sink();
    let outcome = solve(&config, &samples, Some(&secret), &mut sink);

    assert_eq!(outcome.secret.len(), 8);
    assert!(outcome.secret.iter().all(|&x| x < 31));
}

#[test]
fn empty_pool_emits_warning_per_block_and_returns_zeros() {
    // Scenario 6.
    let config = Config::lpn(6, 0.1, 3, 2, false).unwrap();
    let mut warning_count = 0usize;
    let mut sink = |e: LogEvent| {
        if matches!(e.severity, Severity::Warning) {
            warning_count += 1;
        }
    };

    let outcome = solve(&config, &[], None, &mut sink);

    assert_eq!(outcome.secret, vec![0; 6]);
    assert!(warning_count >= config.a as usize);
}

#[test]
fn lms_variant_runs_to_completion() {
    let config = Config::lwe(Algorithm::LmsLwe, 4, 17, 0.5, 2, 2).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let instance = Instance::new(&config, None, &mut rng).unwrap();
    let samples = instance.generate_samples(400, &mut rng);

    let mut sink = no_op_sink();
    let outcome = solve(&config, &samples, None, &mut sink);

    assert_eq!(outcome.secret.len(), 4);
    assert!(outcome.secret.iter().all(|&x| x < 17));
}

#[test]
fn coded_variant_runs_to_completion() {
    let config = Config::lwe(Algorithm::CodedLwe, 6, 17, 0.5, 3, 2).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let instance = Instance::new(&config, None, &mut rng).unwrap();
    let samples = instance.generate_samples(500, &mut rng);

    let mut sink = no_op_sink();
    let outcome = solve(&config, &samples, None, &mut sink);

    assert_eq!(outcome.secret.len(), 6);
}

#[test]
fn coded_sieving_variant_runs_to_completion() {
    let config = Config::lwe(Algorithm::CodedSievingLwe, 6, 17, 0.5, 3, 2).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let instance = Instance::new(&config, None, &mut rng).unwrap();
    let samples = instance.generate_samples(500, &mut rng);

    let mut sink = no_op_sink();
    let outcome = solve(&config, &samples, None, &mut sink);

    assert_eq!(outcome.secret.len(), 6);
}

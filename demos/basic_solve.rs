//! Minimal driver: builds a Config, draws samples from a fixed secret, and
//! prints the solver's progress log plus the recovered secret.

use bkw_lab::{config::Algorithm, solve, Config, Instance};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    let config = Config::lwe(Algorithm::Lwe, 8, 31, 1.5, 2, 4).expect("valid config");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let instance = Instance::new(&config, None, &mut rng).expect("valid secret");
    let secret = instance.secret().to_vec();
    let samples = instance.generate_samples(800, &mut rng);

    let mut sink = |event: bkw_lab::LogEvent| {
        println!("[{:?}] {}", event.severity, event.message);
    };

    let outcome = solve(&config, &samples, Some(&secret), &mut sink);
    println!("recovered: {:?}", outcome.secret);
    println!("true:      {:?}", secret);
    if let Some(acc) = outcome.overall_accuracy {
        println!("accuracy: {acc:.1}%");
    }
}

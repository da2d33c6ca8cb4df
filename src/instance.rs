//! The (secret, samples) pair carrier and the fixed sample oracle.
//!
//! Sample generation is a specified collaborator, not part of the excluded
//! UI driver: both instance kinds draw uniformly random coefficient vectors
//! and apply the noise model named by their ring.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::Config;
use crate::error::ConfigError;
use crate::sample::Sample;

/// An LPN instance: a binary secret plus a Bernoulli noise parameter.
#[derive(Debug, Clone)]
pub struct LpnInstance {
    pub k: u32,
    pub tau: f64,
    pub secret: Vec<u32>,
}

impl LpnInstance {
    /// Builds an instance from a pre-validated secret, or draws a fresh one.
    /// Callers that accept a caller-supplied secret should validate it with
    /// [`crate::config::Config::validate_secret`] first.
    pub fn new(k: u32, tau: f64, secret: Option<Vec<u32>>, rng: &mut impl Rng) -> Self {
        let secret = secret.unwrap_or_else(|| (0..k).map(|_| rng.gen_range(0..2)).collect());
        LpnInstance { k, tau, secret }
    }

    /// Draws `count` samples `(v, c = <v, s> xor noise)`, `noise ~ Bernoulli(tau)`.
    pub fn generate_samples(&self, count: usize, rng: &mut impl Rng) -> Vec<Sample> {
        (0..count)
            .map(|_| {
                let v: Vec<u32> = (0..self.k).map(|_| rng.gen_range(0..2)).collect();
                let inner = v
                    .iter()
                    .zip(self.secret.iter())
                    .fold(0u32, |acc, (&vi, &si)| acc ^ (vi & si));
                let noise = if rng.gen::<f64>() < self.tau { 1 } else { 0 };
                Sample::new(v, inner ^ noise)
            })
            .collect()
    }
}

/// An LWE instance: a mod-q secret plus a discrete-Gaussian noise parameter.
#[derive(Debug, Clone)]
pub struct LweInstance {
    pub n: u32,
    pub q: u32,
    pub sigma: f64,
    pub secret: Vec<u32>,
}

impl LweInstance {
    /// Builds an instance from a pre-validated secret, or draws a fresh one.
    /// Callers that accept a caller-supplied secret should validate it with
    /// [`crate::config::Config::validate_secret`] first.
    pub fn new(n: u32, q: u32, sigma: f64, secret: Option<Vec<u32>>, rng: &mut impl Rng) -> Self {
        let secret = secret.unwrap_or_else(|| (0..n).map(|_| rng.gen_range(0..q)).collect());
        LweInstance { n, q, sigma, secret }
    }

    /// Draws `count` samples `(v, c = <v, s> + e mod q)`, `e ~ round(N(0, sigma^2))`.
    pub fn generate_samples(&self, count: usize, rng: &mut impl Rng) -> Vec<Sample> {
        let normal = if self.sigma > 0.0 {
            Some(Normal::new(0.0, self.sigma).expect("sigma > 0 validated by Config"))
        } else {
            None
        };
        (0..count)
            .map(|_| {
                let v: Vec<u32> = (0..self.n).map(|_| rng.gen_range(0..self.q)).collect();
                let inner: u64 = v
                    .iter()
                    .zip(self.secret.iter())
                    .map(|(&vi, &si)| vi as u64 * si as u64)
                    .sum();
                let noise: i64 = match &normal {
                    Some(dist) => dist.sample(rng).round() as i64,
                    None => 0,
                };
                let q = self.q as i64;
                let c = ((inner as i64 % q) + noise % q + q) % q;
                Sample::new(v, c as u32)
            })
            .collect()
    }
}

/// Generates samples for either instance kind from a validated [`Config`]
/// and an optional fixed secret.
pub enum Instance {
    Lpn(LpnInstance),
    Lwe(LweInstance),
}

impl Instance {
    pub fn new(
        config: &Config,
        secret: Option<Vec<u32>>,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        if let Some(s) = &secret {
            config.validate_secret(s)?;
        }
        if config.algorithm.is_lwe() {
            Ok(Instance::Lwe(LweInstance::new(
                config.dimension,
                config.q,
                config.sigma,
                secret,
                rng,
            )))
        } else {
            Ok(Instance::Lpn(LpnInstance::new(
                config.dimension,
                config.tau,
                secret,
                rng,
            )))
        }
    }

    pub fn secret(&self) -> &[u32] {
        match self {
            Instance::Lpn(i) => &i.secret,
            Instance::Lwe(i) => &i.secret,
        }
    }

    pub fn generate_samples(&self, count: usize, rng: &mut impl Rng) -> Vec<Sample> {
        match self {
            Instance::Lpn(i) => i.generate_samples(count, rng),
            Instance::Lwe(i) => i.generate_samples(count, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn lpn_samples_are_consistent_when_noiseless() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let instance = LpnInstance::new(4, 0.0, Some(vec![1, 0, 1, 1]), &mut rng);
        let samples = instance.generate_samples(50, &mut rng);
        for s in &samples {
            let inner = s
                .v
                .iter()
                .zip(instance.secret.iter())
                .fold(0u32, |acc, (&vi, &si)| acc ^ (vi & si));
            assert_eq!(inner, s.c);
        }
    }

    #[test]
    fn lwe_samples_are_consistent_when_noiseless() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let instance = LweInstance::new(4, 7, 0.0, Some(vec![3, 1, 5, 2]), &mut rng);
        let samples = instance.generate_samples(50, &mut rng);
        for s in &samples {
            let inner: u64 = s
                .v
                .iter()
                .zip(instance.secret.iter())
                .map(|(&vi, &si)| vi as u64 * si as u64)
                .sum();
            assert_eq!((inner % 7) as u32, s.c);
        }
    }

    #[test]
    fn rejects_secret_length_mismatch() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = Config::lpn(4, 0.0, 2, 2, false).unwrap();
        let err = Instance::new(&config, Some(vec![1, 0]), &mut rng).unwrap_err();
        assert!(matches!(err, ConfigError::SecretLengthMismatch { .. }));
    }
}

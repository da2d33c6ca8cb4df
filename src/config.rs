//! The validated input record for [`crate::solver::solve`].
//!
//! `Config::new` is the single fallible entry point: once constructed, a
//! `Config` is known-good and every downstream fault kind is logged and
//! absorbed rather than propagated.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which problem family and reduction strategy a run selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Standard BKW with majority-vote block recovery (LPN).
    LpnStandard,
    /// LF1: BKW with Walsh–Hadamard block recovery (LPN).
    LpnLf1,
    /// BKW-LWE with Gaussian hypothesis-testing block recovery.
    Lwe,
    /// LMS-BKW: modulus-switched LWE reduction.
    LmsLwe,
    /// CODED-BKW: linear-code-collapsing LWE reduction.
    CodedLwe,
    /// CODED-BKW + Sieving: norm-bounded combination after each coded step.
    CodedSievingLwe,
}

impl Algorithm {
    pub fn is_lwe(self) -> bool {
        !matches!(self, Algorithm::LpnStandard | Algorithm::LpnLf1)
    }
}

/// Validated parameters for one `solve` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub algorithm: Algorithm,
    /// Secret dimension (`k` for LPN, `n` for LWE).
    pub dimension: u32,
    /// LWE modulus; ignored for LPN (treated as the fixed ring size 2).
    pub q: u32,
    /// LPN Bernoulli flip probability.
    pub tau: f64,
    /// LWE Gaussian noise standard deviation.
    pub sigma: f64,
    /// Block count.
    pub a: u32,
    /// Block width.
    pub b: u32,
    /// Hamming-weight cap for the LWE hypothesis-search filter (default 2).
    pub d: usize,
    /// Per-coordinate candidate bound for the LWE hypothesis search
    /// (default 5).
    pub q_cap: u32,
    /// CODED-BKW standard reduction-step count (default 1).
    pub t1: u32,
    /// CODED-BKW coded reduction-step count (default 1).
    pub t2: u32,
    /// Sieving norm bound (default 5).
    pub sieve_bound: f64,
}

impl Config {
    /// The ring modulus samples live in: `q` for LWE, fixed at 2 for LPN.
    pub fn ring_modulus(&self) -> u32 {
        if self.algorithm.is_lwe() {
            self.q
        } else {
            2
        }
    }

    pub fn lpn(dimension: u32, tau: f64, a: u32, b: u32, lf1: bool) -> Result<Self, ConfigError> {
        let cfg = Config {
            algorithm: if lf1 {
                Algorithm::LpnLf1
            } else {
                Algorithm::LpnStandard
            },
            dimension,
            q: 2,
            tau,
            sigma: 0.0,
            a,
            b,
            d: 2,
            q_cap: 5,
            t1: 1,
            t2: 1,
            sieve_bound: 5.0,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn lwe(
        algorithm: Algorithm,
        dimension: u32,
        q: u32,
        sigma: f64,
        a: u32,
        b: u32,
    ) -> Result<Self, ConfigError> {
        let cfg = Config {
            algorithm,
            dimension,
            q,
            tau: 0.0,
            sigma,
            a,
            b,
            d: 2,
            q_cap: 5,
            t1: 1,
            t2: 1,
            sieve_bound: 5.0,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.a * self.b != self.dimension {
            return Err(ConfigError::BlockGeometryMismatch {
                a: self.a,
                b: self.b,
                dimension: self.dimension,
            });
        }
        if self.algorithm.is_lwe() {
            if self.q <= 1 {
                return Err(ConfigError::InvalidModulus(self.q));
            }
            // sigma == 0.0 is the valid noiseless case (§8, scenario 4).
            if self.sigma < 0.0 {
                return Err(ConfigError::InvalidSigma(self.sigma));
            }
        } else if !(0.0..0.5).contains(&self.tau) {
            return Err(ConfigError::InvalidTau(self.tau));
        }
        Ok(())
    }

    /// Validates a candidate secret against this config's dimension/ring.
    pub fn validate_secret(&self, secret: &[u32]) -> Result<(), ConfigError> {
        if secret.len() != self.dimension as usize {
            return Err(ConfigError::SecretLengthMismatch {
                expected: self.dimension,
                got: secret.len(),
            });
        }
        let q = self.ring_modulus();
        for (index, &value) in secret.iter().enumerate() {
            if value >= q {
                return Err(ConfigError::SecretOutOfRange { index, value, q });
            }
        }
        Ok(())
    }
}

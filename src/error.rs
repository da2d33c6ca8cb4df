//! Error types for configuration validation and internal fault reporting.
//!
//! Configuration faults are the only kind that ever reach a caller as an
//! `Err` (see [`ConfigError`]); everything [`BkwError`] can express is
//! logged and absorbed inside [`crate::solver::solve`] instead.

use thiserror::Error;

/// A [`crate::config::Config`] that fails validation at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("block geometry a={a} * b={b} does not equal dimension {dimension}")]
    BlockGeometryMismatch { a: u32, b: u32, dimension: u32 },

    #[error("LWE modulus q must be > 1, got {0}")]
    InvalidModulus(u32),

    #[error("LPN flip probability tau must be in [0, 0.5), got {0}")]
    InvalidTau(f64),

    #[error("LWE noise sigma must be > 0, got {0}")]
    InvalidSigma(f64),

    #[error("secret length {got} does not match configured dimension {expected}")]
    SecretLengthMismatch { expected: u32, got: usize },

    #[error("secret entry {value} at index {index} is out of range [0, {q})")]
    SecretOutOfRange { index: usize, value: u32, q: u32 },
}

/// Internal faults the solver catches and absorbs; never escapes `solve`.
#[derive(Debug, Error)]
pub enum BkwError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("sample pool emptied during reduction step {step}")]
    EmptyPool { step: usize },

    #[error("no usable samples to recover block {block}")]
    DegenerateBlock { block: usize },

    #[error("arithmetic fault: {0}")]
    Arithmetic(String),
}

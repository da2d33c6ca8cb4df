//! `bkw-lab`: an educational cryptanalysis laboratory implementing the
//! Blum–Kalai–Wasserman family of algorithms for LPN and LWE.
//!
//! The public surface is deliberately small: build a [`config::Config`],
//! obtain samples (via [`instance::Instance`] or your own oracle), and call
//! [`solver::solve`]. Everything else here is the machinery `solve` is built
//! out of, exposed so a driver can compose its own variant or inspect an
//! intermediate step.

pub mod arithmetic;
pub mod back_substitution;
pub mod block_solver;
pub mod config;
pub mod error;
pub mod instance;
pub mod log;
pub mod reducer;
pub mod sample;
pub mod solver;
pub mod variants;

pub use config::{Algorithm, Config};
pub use error::{BkwError, ConfigError};
pub use instance::{Instance, LpnInstance, LweInstance};
pub use log::{LogEvent, Severity, Sink};
pub use sample::Sample;
pub use solver::{solve, BlockAccuracy, SolveOutcome};

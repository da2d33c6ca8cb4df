//! Pluggable reducer overrides. Each variant differs from the standard
//! table-based reducer in how (or whether) it collapses a block window
//! before pairing samples; the outer `solve` loop in [`crate::solver`] is
//! shared across all of them.

pub mod coded;
pub mod lms;
pub mod sieving;

use crate::config::Config;
use crate::error::BkwError;
use crate::log::Sink;
use crate::reducer;
use crate::sample::Sample;

/// A capability object exposing the one operation variants override.
pub trait ReductionStrategy {
    fn reduce(
        &self,
        pool: Vec<Sample>,
        block_current: usize,
        config: &Config,
        sink: &mut Sink<'_>,
    ) -> Result<Vec<Sample>, BkwError>;
}

/// The shared table-based reducer, used by standard BKW, LF1, and BKW-LWE.
pub struct StandardReduction;

impl ReductionStrategy for StandardReduction {
    fn reduce(
        &self,
        pool: Vec<Sample>,
        block_current: usize,
        config: &Config,
        sink: &mut Sink<'_>,
    ) -> Result<Vec<Sample>, BkwError> {
        reducer::reduce(pool, block_current, config.b as usize, config.ring_modulus(), sink)
    }
}

/// Resolves the reduction strategy named by `config.algorithm`.
pub fn strategy_for(config: &Config) -> Box<dyn ReductionStrategy> {
    use crate::config::Algorithm::*;
    match config.algorithm {
        LpnStandard | LpnLf1 | Lwe => Box::new(StandardReduction),
        LmsLwe => Box::new(lms::LmsReduction::default()),
        CodedLwe => Box::new(coded::CodedReduction),
        CodedSievingLwe => Box::new(sieving::CodedSievingReduction),
    }
}

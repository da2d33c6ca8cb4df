//! LMS-BKW: modulus switching.
//!
//! Samples are rescaled from `Z/qZ` into the smaller `Z/pZ` (`p = q/2`)
//! before the standard reducer runs, then lifted back. The re-lift is
//! lossy by construction; callers are warned once per run.

use std::cell::Cell;

use crate::config::Config;
use crate::error::BkwError;
use crate::log::{emit, Severity, Sink};
use crate::reducer;
use crate::sample::Sample;
use crate::variants::ReductionStrategy;

fn rescale(v: u32, from_q: u32, to_p: u32) -> u32 {
    ((v as u64 * to_p as u64) / from_q as u64) as u32 % to_p.max(1)
}

/// Warns once per `solve` run about the lossy re-lift (a fresh
/// `LmsReduction` is built per run by [`crate::variants::strategy_for`], so
/// this flag carries no state across runs).
#[derive(Default)]
pub struct LmsReduction {
    warned: Cell<bool>,
}

impl ReductionStrategy for LmsReduction {
    fn reduce(
        &self,
        pool: Vec<Sample>,
        block_current: usize,
        config: &Config,
        sink: &mut Sink<'_>,
    ) -> Result<Vec<Sample>, BkwError> {
        let q = config.ring_modulus();
        let p = (q / 2).max(1);

        if !self.warned.replace(true) {
            emit(
                sink,
                Severity::Warning,
                format!("LMS-BKW: modulus switch q={q} -> p={p} loses precision on re-lift"),
            );
        }

        let converted: Vec<Sample> = pool
            .into_iter()
            .map(|s| {
                let v: Vec<u32> = s.v.iter().map(|&x| rescale(x, q, p)).collect();
                let c = rescale(s.c, q, p);
                Sample::new(v, c)
            })
            .collect();

        let reduced = reducer::reduce(converted, block_current, config.b as usize, p, sink)?;

        Ok(reduced
            .into_iter()
            .map(|s| {
                let v: Vec<u32> = s.v.iter().map(|&x| rescale(x, p, q)).collect();
                let c = rescale(s.c, p, q);
                Sample::new(v, c)
            })
            .collect())
    }
}

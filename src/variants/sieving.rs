//! CODED-BKW + Sieving: after each coded step, suppresses norm growth by
//! combining samples whose difference has strictly smaller Euclidean norm.

use crate::arithmetic::mod_sub;
use crate::config::Config;
use crate::error::BkwError;
use crate::log::{emit, Severity, Sink};
use crate::sample::Sample;
use crate::variants::coded;
use crate::variants::ReductionStrategy;

fn norm(v: &[u32]) -> f64 {
    v.iter().map(|&x| (x as f64) * (x as f64)).sum::<f64>().sqrt()
}

/// Bounds `reduced` by `B * sqrt(len)`, replacing over-bound samples with a
/// smaller-norm difference when one is found, dropping them otherwise
/// unless they still fall under `2B * sqrt(len)`.
pub fn sieve(reduced: Vec<Sample>, bound: f64, q: u32) -> Vec<Sample> {
    let mut sieved = Vec::with_capacity(reduced.len());
    for (i, s1) in reduced.iter().enumerate() {
        let len = s1.v.len() as f64;
        let norm1 = norm(&s1.v);
        if norm1 <= bound * len.sqrt() {
            sieved.push(s1.clone());
            continue;
        }

        let mut found = false;
        for s2 in &reduced[i + 1..] {
            let v = mod_sub(&s1.v, &s2.v, q);
            if norm(&v) < norm1 {
                let c = mod_sub(&[s1.c], &[s2.c], q)[0];
                sieved.push(Sample::new(v, c));
                found = true;
                break;
            }
        }

        if !found && norm1 < 2.0 * bound * len.sqrt() {
            sieved.push(s1.clone());
        }
    }
    sieved
}

pub struct CodedSievingReduction;

impl ReductionStrategy for CodedSievingReduction {
    fn reduce(
        &self,
        pool: Vec<Sample>,
        block_current: usize,
        config: &Config,
        sink: &mut Sink<'_>,
    ) -> Result<Vec<Sample>, BkwError> {
        let b = config.b as usize;
        let q = config.ring_modulus();
        let n = config.dimension as usize;
        let total_steps = block_current.saturating_sub(1);
        let standard_steps = (config.t1 as usize).min(total_steps);

        let mut temp = coded::run_standard_steps(pool, standard_steps, b, q)?;

        let remaining = total_steps - standard_steps;
        let coded_steps = (config.t2 as usize).min(remaining);
        for i in 0..coded_steps {
            if temp.is_empty() {
                return Err(BkwError::EmptyPool { step: standard_steps + i + 1 });
            }
            let start = (standard_steps + i) * b;
            let end = (start + b + 1).min(n);
            if start >= end {
                break;
            }
            temp = coded::coded_reduction_step(temp, start, end, q);
            temp = sieve(temp, config.sieve_bound, q);
            emit(
                sink,
                Severity::Info,
                format!(
                    "coded+sieve step over [{start},{end}) (B={}): {} samples remain",
                    config.sieve_bound,
                    temp.len()
                ),
            );
        }

        Ok(temp)
    }
}

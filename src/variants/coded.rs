//! CODED-BKW: `t1` standard reduction steps followed by `t2` coded steps
//! that collapse a wider window to the nearest codeword of a repetition
//! code before pairing. The repetition-code decoder is a teaching
//! demonstrator, not an information-theoretic guarantee.

use fnv::FnvHashMap;

use crate::arithmetic::mod_sub;
use crate::config::Config;
use crate::error::BkwError;
use crate::log::{emit, Severity, Sink};
use crate::reducer::reduce_step;
use crate::sample::Sample;
use crate::variants::ReductionStrategy;

/// The nearest repetition-code word for `window`: the constant vector
/// whose value minimises `|x - mean(window)|`.
pub fn nearest_codeword(window: &[u32], q: u32) -> Vec<u32> {
    if window.is_empty() {
        return Vec::new();
    }
    let mean = window.iter().map(|&x| x as f64).sum::<f64>() / window.len() as f64;
    let closest = (0..q)
        .min_by(|&a, &b| {
            (a as f64 - mean)
                .abs()
                .partial_cmp(&(b as f64 - mean).abs())
                .unwrap()
        })
        .unwrap_or(0);
    vec![closest; window.len()]
}

/// One coded reduction step over the window `[start, end)`.
pub fn coded_reduction_step(samples: Vec<Sample>, start: usize, end: usize, q: u32) -> Vec<Sample> {
    let mut table: FnvHashMap<Vec<u32>, Sample> = FnvHashMap::default();
    let mut next = Vec::with_capacity(samples.len());

    for sample in samples {
        let codeword = nearest_codeword(&sample.v[start..end], q);
        if let Some(partner) = table.remove(&codeword) {
            let v = mod_sub(&sample.v, &partner.v, q);
            let c = mod_sub(&[sample.c], &[partner.c], q)[0];
            next.push(Sample::new(v, c));
        } else {
            table.insert(codeword, sample);
        }
    }
    next
}

/// Runs `steps` standard-width reduction passes, erring with
/// [`BkwError::EmptyPool`] if the pool empties before every step runs.
pub fn run_standard_steps(pool: Vec<Sample>, steps: usize, b: usize, q: u32) -> Result<Vec<Sample>, BkwError> {
    let mut temp = pool;
    for step in 1..=steps {
        if temp.is_empty() {
            return Err(BkwError::EmptyPool { step });
        }
        let start = (step - 1) * b;
        let end = step * b;
        temp = reduce_step(temp, start, end, q);
    }
    Ok(temp)
}

/// Runs `t1` standard-width steps then `t2` coded (width `b+1`) steps,
/// never exceeding the `block_current - 1` steps the outer loop needs.
pub fn reduce(
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

    let mut temp = run_standard_steps(pool, standard_steps, b, q)?;

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
        temp = coded_reduction_step(temp, start, end, q);
        emit(
            sink,
            Severity::Info,
            format!("coded reduction step over [{start},{end}): {} samples remain", temp.len()),
        );
    }

    Ok(temp)
}

pub struct CodedReduction;

impl ReductionStrategy for CodedReduction {
    fn reduce(
        &self,
        pool: Vec<Sample>,
        block_current: usize,
        config: &Config,
        sink: &mut Sink<'_>,
    ) -> Result<Vec<Sample>, BkwError> {
        reduce(pool, block_current, config, sink)
    }
}

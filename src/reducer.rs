//! The block-collision reduction engine shared by every algorithm family.
//! Standard BKW (LPN), LF1, and BKW-LWE all use this table-based,
//! pop-on-hit reducer; LPN is simply the case `q = 2`, where the
//! negated-key probe degenerates to the primary key and is harmless.

use fnv::FnvHashMap;
use log::debug;

use crate::arithmetic::{mod_add, mod_sub, negate_mod};
use crate::error::BkwError;
use crate::log::{emit, Severity, Sink};
use crate::sample::Sample;

/// Packs a block-coordinate tuple into a single hashable key, mixed-radix
/// over the ring modulus `q`.
fn pack_key(block: &[u32], q: u32) -> u64 {
    block
        .iter()
        .fold(0u64, |acc, &x| acc * q as u64 + x as u64)
}

/// One reduction step: annihilates the window `[start, end)` by pairing
/// samples that share (or, for non-binary rings, negate to) the same
/// block-coordinate key.
pub fn reduce_step(pool: Vec<Sample>, start: usize, end: usize, q: u32) -> Vec<Sample> {
    let mut table: FnvHashMap<u64, Sample> = FnvHashMap::default();
    let mut next = Vec::with_capacity(pool.len());

    for sample in pool {
        let block = sample.block_key(start, end);
        if block.iter().all(|&x| x == 0) {
            next.push(sample);
            continue;
        }
        let key = pack_key(block, q);
        if let Some(partner) = table.remove(&key) {
            let v = mod_sub(&sample.v, &partner.v, q);
            let c = mod_sub(&[sample.c], &[partner.c], q)[0];
            next.push(Sample::new(v, c));
            continue;
        }
        let neg_block: Vec<u32> = block.iter().map(|&x| negate_mod(x, q)).collect();
        let neg_key = pack_key(&neg_block, q);
        if neg_key != key {
            if let Some(partner) = table.remove(&neg_key) {
                let v = mod_add(&sample.v, &partner.v, q);
                let c = mod_add(&[sample.c], &[partner.c], q)[0];
                next.push(Sample::new(v, c));
                continue;
            }
        }
        table.insert(key, sample);
    }

    debug!(
        "reduce_step [{start},{end}): {} in, {} out, {} unpaired dropped",
        next.len() + table.len(),
        next.len(),
        table.len()
    );
    next
}

/// Reduces `pool` so every sample is zero on block windows `1..block_current-1`.
/// Errs with [`BkwError::EmptyPool`] if the pool empties before every step runs.
pub fn reduce(
    pool: Vec<Sample>,
    block_current: usize,
    b: usize,
    q: u32,
    sink: &mut Sink<'_>,
) -> Result<Vec<Sample>, BkwError> {
    let mut pending = pool;
    for step in 1..block_current {
        if pending.is_empty() {
            return Err(BkwError::EmptyPool { step });
        }
        let start = (step - 1) * b;
        let end = step * b;
        pending = reduce_step(pending, start, end, q);
        emit(
            sink,
            Severity::Info,
            format!("reduction step {step}/{}: {} samples remain", block_current - 1, pending.len()),
        );
    }
    Ok(pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_step_zeroes_the_window_lpn() {
        let pool = vec![
            Sample::new(vec![1, 0, 1, 1], 1),
            Sample::new(vec![1, 0, 0, 1], 0),
            Sample::new(vec![0, 1, 1, 0], 1),
        ];
        let reduced = reduce_step(pool, 0, 2, 2);
        for s in &reduced {
            assert_eq!(&s.v[0..2], &[0, 0]);
        }
    }

    #[test]
    fn reduce_step_pairs_negated_keys_lwe() {
        let pool = vec![
            Sample::new(vec![3, 1], 2),
            Sample::new(vec![4, 5], 6), // 4 == (-3) mod 7
        ];
        let reduced = reduce_step(pool, 0, 1, 7);
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].v[0], 0);
    }

    #[test]
    fn reduce_drops_unpaired_samples() {
        let pool = vec![Sample::new(vec![1, 0], 1)];
        let reduced = reduce_step(pool, 0, 1, 2);
        assert!(reduced.is_empty());
    }

    #[test]
    fn reduce_multistep_preserves_zeroed_prefix() {
        let pool = vec![
            Sample::new(vec![1, 1, 0, 1], 1),
            Sample::new(vec![1, 1, 1, 0], 0),
            Sample::new(vec![0, 0, 1, 1], 1),
            Sample::new(vec![1, 1, 0, 0], 1),
        ];
        let mut sink = |_event: crate::log::LogEvent| {};
        let reduced = reduce(pool, 3, 2, 2, &mut sink).unwrap();
        for s in &reduced {
            assert_eq!(&s.v[0..4], &[0, 0, 0, 0]);
        }
    }

    #[test]
    fn reduce_errs_on_empty_pool() {
        let mut sink = |_event: crate::log::LogEvent| {};
        let err = reduce(Vec::new(), 3, 2, 2, &mut sink).unwrap_err();
        assert!(matches!(err, BkwError::EmptyPool { step: 1 }));
    }
}

//! Eliminates a recovered block's contribution from the original samples
//! in-place, so later block iterations see the updated target scalar `c`.

use crate::sample::Sample;

/// Subtracts `<v[start..end], secret[start..end]>` from `sample.c`, mod `q`
/// (for LPN, `q = 2` and subtraction is XOR).
pub fn back_substitute(samples: &mut [Sample], secret: &[u32], start: usize, end: usize, q: u32) {
    for sample in samples.iter_mut() {
        let contribution: u64 = sample.v[start..end]
            .iter()
            .zip(secret[start..end].iter())
            .map(|(&vi, &si)| vi as u64 * si as u64)
            .sum();
        let q64 = q as u64;
        let c = sample.c as u64;
        sample.c = ((c + q64 - (contribution % q64)) % q64) as u32;
    }
}

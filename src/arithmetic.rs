//! The arithmetic kernel: the handful of primitives every reducer, block
//! solver, and variant is built out of.
//!
//! LPN is treated as LWE specialised to modulus 2 — `xor` is implemented in
//! terms of [`mod_add`] with `q = 2` rather than duplicated.

use crate::error::BkwError;

/// Element-wise XOR of two equal-length bit vectors (entries must be 0/1).
pub fn xor(a: &[u32], b: &[u32]) -> Vec<u32> {
    mod_add(a, b, 2)
}

/// `(a[i] + b[i]) mod q`, non-negative.
pub fn mod_add(a: &[u32], b: &[u32], q: u32) -> Vec<u32> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| ((x as u64 + y as u64) % q as u64) as u32)
        .collect()
}

/// `(a[i] - b[i]) mod q`, non-negative.
pub fn mod_sub(a: &[u32], b: &[u32], q: u32) -> Vec<u32> {
    debug_assert_eq!(a.len(), b.len());
    let q64 = q as u64;
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| ((x as u64 + q64 - (y as u64 % q64)) % q64) as u32)
        .collect()
}

/// `(-x) mod q`, non-negative.
pub fn negate_mod(x: u32, q: u32) -> u32 {
    if x == 0 {
        0
    } else {
        q - (x % q)
    }
}

/// Count of non-zero entries.
pub fn hamming_weight(v: &[u32]) -> usize {
    v.iter().filter(|&&x| x != 0).count()
}

/// Most-frequent element of a non-empty multiset; ties keep the first value
/// to reach the winning count.
pub fn majority(values: &[u32]) -> Result<u32, BkwError> {
    if values.is_empty() {
        return Err(BkwError::Arithmetic("majority() on empty multiset".into()));
    }
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for &v in values {
        match counts.iter_mut().find(|(val, _)| *val == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }
    let mut best = counts[0];
    for &(val, n) in &counts[1..] {
        if n > best.1 {
            best = (val, n);
        }
    }
    Ok(best.0)
}

/// Folded discrete-Gaussian density at `x` modulo `q`, summing aliases
/// `x + k*q` for `k` in `-3..=3`.
pub fn gauss_pdf(x: i64, sigma: f64, q: i64) -> f64 {
    const K: i64 = 3;
    let norm = 1.0 / (sigma * (2.0 * std::f64::consts::PI).sqrt());
    let mut total = 0.0;
    for k in -K..=K {
        let shifted = (x + k * q) as f64;
        total += norm * (-(shifted * shifted) / (2.0 * sigma * sigma)).exp();
    }
    total
}

/// Log-likelihood score used by the Gaussian hypothesis search, floored at
/// `-1000` when the density underflows `1e-20`.
pub fn log_likelihood(error: i64, sigma: f64, q: i64) -> f64 {
    let prob = gauss_pdf(error, sigma, q);
    if prob < 1e-20 {
        return -1000.0;
    }
    (prob * q as f64).ln()
}

/// Iterative Walsh–Hadamard transform. `f.len()` must be a power of two.
pub fn wht(f: &[i64]) -> Result<Vec<i64>, BkwError> {
    let n = f.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(BkwError::Arithmetic(format!(
            "wht() input length {n} is not a power of two"
        )));
    }
    let mut out = f.to_vec();
    let mut step = 1;
    while step < n {
        let mut i = 0;
        while i < n {
            for j in i..i + step {
                let a = out[j];
                let b = out[j + step];
                out[j] = a + b;
                out[j + step] = a - b;
            }
            i += step * 2;
        }
        step *= 2;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_matches_mod_add_q2() {
        assert_eq!(xor(&[1, 0, 1, 1], &[1, 1, 0, 0]), vec![0, 1, 1, 1]);
    }

    #[test]
    fn mod_sub_wraps_non_negative() {
        assert_eq!(mod_sub(&[1, 2], &[5, 0], 7), vec![3, 2]);
    }

    #[test]
    fn negate_mod_zero_is_zero() {
        assert_eq!(negate_mod(0, 11), 0);
        assert_eq!(negate_mod(3, 11), 8);
    }

    #[test]
    fn hamming_weight_counts_nonzero() {
        assert_eq!(hamming_weight(&[0, 1, 0, 2, 0]), 2);
    }

    #[test]
    fn majority_idempotence() {
        assert_eq!(majority(&[5, 5, 5, 5]).unwrap(), 5);
    }

    #[test]
    fn majority_ties_prefer_first_seen() {
        assert_eq!(majority(&[1, 0, 1, 0]).unwrap(), 1);
    }

    #[test]
    fn majority_empty_errs() {
        assert!(majority(&[]).is_err());
    }

    #[test]
    fn wht_roundtrip_scaled() {
        let f = vec![1, -1, 2, 3];
        let once = wht(&f).unwrap();
        let twice = wht(&once).unwrap();
        let n = f.len() as i64;
        let restored: Vec<i64> = twice.iter().map(|v| v / n).collect();
        assert_eq!(restored, f);
    }

    #[test]
    fn wht_rejects_non_power_of_two() {
        assert!(wht(&[1, 2, 3]).is_err());
    }

    #[test]
    fn log_likelihood_floors_at_sentinel() {
        let score = log_likelihood(1_000_000, 0.5, 31);
        assert_eq!(score, -1000.0);
    }
}

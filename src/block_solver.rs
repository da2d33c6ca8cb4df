//! Block-recovery strategies: majority vote for standard BKW,
//! Walsh–Hadamard maximisation for LF1, and Gaussian log-likelihood
//! hypothesis testing for BKW-LWE.

use crate::arithmetic::{hamming_weight, log_likelihood, majority, wht};
use crate::error::BkwError;
use crate::log::{emit, Severity, Sink};
use crate::sample::Sample;

/// Majority vote over weight-1 reduced samples, falling back to every
/// nonzero position when no weight-1 sample survived reduction.
pub fn solve_block_majority(
    samples: &[Sample],
    block: usize,
    start: usize,
    end: usize,
    sink: &mut Sink<'_>,
) -> Result<Vec<u32>, BkwError> {
    let block_size = end - start;
    let mut ballots: Vec<Vec<u32>> = vec![Vec::new(); block_size];

    for sample in samples {
        let window = &sample.v[start..end];
        if hamming_weight(window) == 1 {
            let pos = window.iter().position(|&x| x != 0).unwrap();
            ballots[pos].push(sample.c);
        }
    }

    if ballots.iter().all(Vec::is_empty) {
        emit(
            sink,
            Severity::Warning,
            "no weight-1 samples for majority vote, falling back to all samples",
        );
        for sample in samples {
            let window = &sample.v[start..end];
            for (pos, &x) in window.iter().enumerate() {
                if x != 0 {
                    ballots[pos].push(sample.c);
                }
            }
        }
    }

    if ballots.iter().all(Vec::is_empty) {
        return Err(BkwError::DegenerateBlock { block });
    }

    Ok(ballots
        .into_iter()
        .map(|ballot| {
            if ballot.is_empty() {
                0
            } else {
                majority(&ballot).unwrap_or(0)
            }
        })
        .collect())
}

/// Walsh–Hadamard maximum-correlation block recovery (LF1).
pub fn solve_block_wht(
    samples: &[Sample],
    block: usize,
    start: usize,
    end: usize,
    _sink: &mut Sink<'_>,
) -> Result<Vec<u32>, BkwError> {
    let block_size = end - start;
    if samples.is_empty() {
        return Err(BkwError::DegenerateBlock { block });
    }

    let size = 1usize << block_size;
    let mut f = vec![0i64; size];
    for sample in samples {
        let window = &sample.v[start..end];
        let idx = window
            .iter()
            .enumerate()
            .fold(0usize, |acc, (i, &bit)| acc | ((bit as usize) << (block_size - 1 - i)));
        f[idx] += if sample.c == 0 { 1 } else { -1 };
    }

    let f_hat = wht(&f)?;
    // First-wins argmax of |f_hat|, matching the reference implementation's
    // `max()` tie-break rather than `Iterator::max_by_key`'s last-wins.
    let mut best_idx = 0usize;
    let mut best_abs = f_hat[0].unsigned_abs();
    for (idx, &v) in f_hat.iter().enumerate().skip(1) {
        let abs = v.unsigned_abs();
        if abs > best_abs {
            best_abs = abs;
            best_idx = idx;
        }
    }

    Ok((0..block_size)
        .map(|i| ((best_idx >> (block_size - 1 - i)) & 1) as u32)
        .collect())
}

/// Gaussian log-likelihood hypothesis search over weight-<=d patterns (LWE).
#[allow(clippy::too_many_arguments)]
pub fn solve_block_gaussian(
    samples: &[Sample],
    block: usize,
    start: usize,
    end: usize,
    q: u32,
    sigma_total: f64,
    d: usize,
    q_cap: u32,
    sink: &mut Sink<'_>,
) -> Result<Vec<u32>, BkwError> {
    let block_size = end - start;
    let filtered: Vec<&Sample> = samples
        .iter()
        .filter(|s| hamming_weight(&s.v[start..end]) <= d)
        .collect();

    emit(
        sink,
        Severity::Info,
        format!("hypothesis filter kept {}/{} samples", filtered.len(), samples.len()),
    );

    if filtered.is_empty() {
        return Err(BkwError::DegenerateBlock { block });
    }

    let mut partitions: std::collections::HashMap<Vec<bool>, Vec<&Sample>> =
        std::collections::HashMap::new();
    for &sample in &filtered {
        let pattern: Vec<bool> = sample.v[start..end].iter().map(|&x| x != 0).collect();
        partitions.entry(pattern).or_default().push(sample);
    }

    let mut block_secret = vec![0u32; block_size];
    let search_range = q.min(q_cap);

    for (pattern, group) in partitions {
        let positions: Vec<usize> = pattern
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect();
        if positions.is_empty() {
            continue;
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best_candidate = vec![0u32; positions.len()];

        for candidate in Candidates::new(positions.len(), search_range) {
            let mut score = 0.0;
            for sample in &group {
                let mut error = sample.c as i64;
                for (j, &pos) in positions.iter().enumerate() {
                    let abs_pos = start + pos;
                    error -= sample.v[abs_pos] as i64 * candidate[j] as i64;
                }
                let mut error = error.rem_euclid(q as i64);
                if error > q as i64 / 2 {
                    error -= q as i64;
                }
                score += log_likelihood(error, sigma_total, q as i64);
            }
            if score > best_score {
                best_score = score;
                best_candidate = candidate;
            }
        }

        for (j, &pos) in positions.iter().enumerate() {
            block_secret[pos] = best_candidate[j];
        }
    }

    Ok(block_secret)
}

/// Enumerates every tuple in `{0, .., max_val-1}^dim`, big-endian like the
/// reference implementation's recursive `generate_candidates`.
struct Candidates {
    dim: usize,
    max_val: u32,
    next: Option<Vec<u32>>,
}

impl Candidates {
    fn new(dim: usize, max_val: u32) -> Self {
        let next = if dim == 0 {
            Some(vec![])
        } else if max_val == 0 {
            None
        } else {
            Some(vec![0; dim])
        };
        Candidates { dim, max_val, next }
    }
}

impl Iterator for Candidates {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.dim == 0 {
            self.next = None;
            return Some(current);
        }
        let mut carry = current.clone();
        let mut i = self.dim;
        loop {
            if i == 0 {
                self.next = None;
                break;
            }
            i -= 1;
            carry[i] += 1;
            if carry[i] < self.max_val {
                self.next = Some(carry);
                break;
            }
            carry[i] = 0;
        }
        Some(current)
    }
}

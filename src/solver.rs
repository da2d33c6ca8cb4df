//! The top-level `solve` orchestration: iterate blocks from rightmost to
//! leftmost, reduce, recover, back-substitute.

use crate::back_substitution::back_substitute;
use crate::block_solver::{solve_block_gaussian, solve_block_majority, solve_block_wht};
use crate::config::{Algorithm, Config};
use crate::error::BkwError;
use crate::log::{emit, Severity, Sink};
use crate::sample::Sample;
use crate::variants::strategy_for;

/// Per-block accuracy against an optional ground-truth secret.
#[derive(Debug, Clone)]
pub struct BlockAccuracy {
    pub block: usize,
    pub correct: usize,
    pub total: usize,
}

impl BlockAccuracy {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            100.0 * self.correct as f64 / self.total as f64
        }
    }
}

/// The recovered secret plus an optional accuracy narration against a
/// known secret.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub secret: Vec<u32>,
    pub block_accuracy: Option<Vec<BlockAccuracy>>,
    pub overall_accuracy: Option<f64>,
}

/// Runs the full BKW pipeline named by `config.algorithm` against `samples`,
/// emitting progress to `sink`. When `true_secret` is supplied, per-block
/// and final accuracy are computed and both logged and returned.
///
/// Never fails: a degenerate or empty sample pool at any step defaults the
/// affected block to zeros and is logged at `warning`.
pub fn solve(
    config: &Config,
    samples: &[Sample],
    true_secret: Option<&[u32]>,
    sink: &mut Sink<'_>,
) -> SolveOutcome {
    let dimension = config.dimension as usize;
    let b = config.b as usize;
    let a = config.a as usize;
    let q = config.ring_modulus();

    emit(sink, Severity::Phase, "solve: starting");
    emit(
        sink,
        Severity::Info,
        format!(
            "algorithm={:?} dimension={dimension} a={a} b={b}",
            config.algorithm
        ),
    );

    let mut originals: Vec<Sample> = samples.to_vec();
    let mut found_secret = vec![0u32; dimension];
    let strategy = strategy_for(config);
    let mut block_accuracy = true_secret.map(|_| Vec::with_capacity(a));

    for block in (1..=a).rev() {
        emit(
            sink,
            Severity::Phase,
            format!("block {block}/{a}: positions {}..{}", (block - 1) * b, block * b),
        );

        let pool = originals.clone();
        let reduced = match strategy.reduce(pool, block, config, sink) {
            Ok(reduced) => reduced,
            Err(err) => {
                emit(sink, Severity::Warning, format!("block {block}: reduction failed ({err}), treating as empty pool"));
                Vec::new()
            }
        };

        let start = (block - 1) * b;
        let end = block * b;

        let block_secret = recover_block(config, &reduced, block, start, end, q, sink);

        found_secret[start..end].copy_from_slice(&block_secret);

        if let (Some(true_s), Some(history)) = (true_secret, block_accuracy.as_mut()) {
            let correct = block_secret
                .iter()
                .zip(true_s[start..end].iter())
                .filter(|(a, b)| a == b)
                .count();
            let acc = BlockAccuracy {
                block,
                correct,
                total: b,
            };
            emit(
                sink,
                if acc.correct == acc.total {
                    Severity::Success
                } else {
                    Severity::Warning
                },
                format!("block {block}: {}/{} coordinates correct ({:.1}%)", acc.correct, acc.total, acc.percent()),
            );
            history.push(acc);
        }

        if block > 1 {
            back_substitute(&mut originals, &found_secret, start, end, q);
        }
    }

    let overall_accuracy = true_secret.map(|true_s| {
        let correct = found_secret
            .iter()
            .zip(true_s.iter())
            .filter(|(a, b)| a == b)
            .count();
        100.0 * correct as f64 / dimension as f64
    });

    emit(
        sink,
        Severity::Secret,
        format!("recovered secret: {found_secret:?}"),
    );
    if let Some(acc) = overall_accuracy {
        emit(
            sink,
            if acc >= 90.0 { Severity::Success } else { Severity::Warning },
            format!("overall accuracy: {acc:.1}%"),
        );
    }
    emit(sink, Severity::Phase, "solve: complete");

    SolveOutcome {
        secret: found_secret,
        block_accuracy,
        overall_accuracy,
    }
}

fn recover_block(
    config: &Config,
    reduced: &[Sample],
    block: usize,
    start: usize,
    end: usize,
    q: u32,
    sink: &mut Sink<'_>,
) -> Vec<u32> {
    let result = match config.algorithm {
        Algorithm::LpnStandard => solve_block_majority(reduced, block, start, end, sink),
        Algorithm::LpnLf1 => solve_block_wht(reduced, block, start, end, sink),
        Algorithm::Lwe | Algorithm::LmsLwe | Algorithm::CodedLwe | Algorithm::CodedSievingLwe => {
            let steps = block - 1;
            let sigma_total = config.sigma * 2f64.powi(steps as i32).sqrt();
            emit(
                sink,
                Severity::Value,
                format!("sigma_total={sigma_total:.4} after {steps} reduction steps"),
            );
            solve_block_gaussian(reduced, block, start, end, q, sigma_total, config.d, config.q_cap, sink)
        }
    };

    match result {
        Ok(block_secret) => block_secret,
        Err(err @ BkwError::Arithmetic(_)) => {
            emit(sink, Severity::Error, format!("block {block}: arithmetic fault ({err})"));
            vec![0; end - start]
        }
        Err(err) => {
            emit(sink, Severity::Warning, format!("block {block}: block solve failed ({err})"));
            vec![0; end - start]
        }
    }
}

//! The `(v, c)` sample carrier shared by the LPN and LWE code paths.

use serde::{Deserialize, Serialize};

/// One noisy linear sample `(v, c)` over `Z/qZ` (LPN uses `q = 2`).
///
/// Freely copyable; the reducer consumes samples by value and never
/// aliases the caller's originals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub v: Vec<u32>,
    pub c: u32,
}

impl Sample {
    pub fn new(v: Vec<u32>, c: u32) -> Self {
        Sample { v, c }
    }

    /// The block-coordinate key for the window `[start, end)`.
    pub fn block_key(&self, start: usize, end: usize) -> &[u32] {
        &self.v[start..end]
    }
}

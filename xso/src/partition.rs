use anyhow::Result;
use log::{debug, trace};

use super::{jump, jump_coefficients, State};

/// Splits the period of a generator into `2^p` non-overlapping streams of equal length, handing
/// out one generator positioned at the start of each.
///
/// `2^p` is the smallest power of two not less than the number of streams requested, so each
/// stream is `2^(n - p)` steps long where `n` is the number of bits of state.
/// The period is `2^n - 1`, so once every stream has been handed out the cursor comes back
/// around to one step past the parent.
///
/// # Example
/// ```
/// # use xso::prelude::*;
/// let parent = Rng64::from_seed_word(1);
/// let streams: Vec<Rng64> = Partition::new(&parent, 3).unwrap().take(3).collect();
///
/// // Four streams of 2^254 steps each, the first starts at the parent
/// assert_eq!(streams[0], parent);
/// assert_ne!(streams[1], streams[2]);
/// ```
#[derive(Clone, Debug)]
pub struct Partition<S: State> {
    cursor: S,
    coeffs: S::Words,
    log2: usize,
}

impl<S: State> Partition<S> {
    /// Prepares to split `parent` into at least `k` streams.
    ///
    /// Fails if `S` has no precomputed characteristic polynomial.
    pub fn new(parent: &S, k: usize) -> Result<Self> {
        // Number of bits needed to write k - 1, so 2^p >= k
        let p = (usize::BITS - k.max(1).saturating_sub(1).leading_zeros()) as usize;
        let log2 = S::BITS - p;

        debug!(
            "Partitioning {} into {} streams of 2^{log2} steps",
            S::name(),
            1u128 << p
        );

        Ok(Self {
            cursor: parent.clone(),
            coeffs: jump_coefficients::<S>(log2, true)?,
            log2,
        })
    }

    /// Each stream is `2^jump_size_log2()` steps long.
    pub fn jump_size_log2(&self) -> usize {
        self.log2
    }

    /// Hands out a copy of the cursor, then moves the cursor to the start of the next stream.
    pub fn next_stream(&mut self) -> S {
        let stream = self.cursor.clone();
        jump(&mut self.cursor, &self.coeffs);
        trace!("Handed out a {} stream", S::name());
        stream
    }
}

impl<S: State> Iterator for Partition<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_stream())
    }
}

use std::{fmt, ops::Index};

use anyhow::Result;
use rand::RngCore;
use types::{Word, WordArray};

use super::{fill_from_entropy, fill_from_word, jump, jump_coefficients, Scrambler, State, StateKey};

/// A pseudo-random number generator made of a linear [`State`] and a [`Scrambler`] that turns
/// that state into output words.
///
/// Every output is computed from the state as it is *before* stepping.
/// Generators also implement [`rand::RngCore`], so any `rand` distribution can draw from them.
///
/// # Example
/// ```
/// # use xso::prelude::*;
/// let mut rng = Xoshiro4x64StarStar::from_words(&[1, 0, 0, 0]);
/// assert_eq!(rng.next_word(), 0);
/// assert_eq!(rng.next_word(), 0x1680);
/// assert_eq!(rng.to_string(), "xoshiro<4x64,17,45>star_star<5,7,9,1>");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Generator<S, X> {
    state: S,
    scrambler: X,
}

impl<S: State + Default, X: Scrambler> Generator<S, X> {
    /// Creates a generator seeded from the system's entropy source.
    pub fn new() -> Self {
        let mut rng = Self::from_state(S::default());
        rng.seed_from_entropy();
        rng
    }

    /// Creates a generator whose state is expanded from a single `seed` word.
    ///
    /// The same seed always produces the same stream.
    pub fn from_seed_word(seed: u64) -> Self {
        let mut rng = Self::from_state(S::default());
        rng.seed_from_word(seed);
        rng
    }

    /// Creates a generator whose state is copied verbatim from `words`.
    ///
    /// If `words` is shorter than the state, the rest of the default state is kept.
    /// An all-zero state is a fixed point and will only ever output zeros.
    pub fn from_words(words: &[S::Word]) -> Self {
        let mut rng = Self::from_state(S::default());
        rng.seed(words);
        rng
    }
}

impl<S: State, X: Scrambler> Generator<S, X> {
    /// Wraps an existing state.
    pub fn from_state(state: S) -> Self {
        Self {
            state,
            scrambler: X::default(),
        }
    }

    /// The underlying state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Reseeds from the system's entropy source.
    pub fn seed_from_entropy(&mut self) {
        let mut words = S::Words::zeroed();
        fill_from_entropy(words.as_mut_slice());
        self.state.seed(words.as_slice());
    }

    /// Reseeds by expanding a single `seed` word into a full state.
    pub fn seed_from_word(&mut self, seed: u64) {
        let mut words = S::Words::zeroed();
        fill_from_word(seed, words.as_mut_slice());
        self.state.seed(words.as_slice());
    }

    /// Returns the next output word, then steps the state.
    #[inline(always)]
    pub fn next_word(&mut self) -> S::Word {
        let result = self.scrambler.scramble(&self.state);
        self.state.step();
        result
    }

    /// Steps the state `z` times, discarding the outputs.
    ///
    /// For large `z`, [`Generator::jump_by`] is far faster.
    pub fn discard(&mut self, z: u64) {
        for _ in 0..z {
            self.state.step();
        }
    }

    /// Computes the coefficients used to jump this kind of generator by `j` steps, or by `2^j`
    /// steps if `pow2` is set.
    ///
    /// Computing these is much more expensive than applying them, so they are worth keeping if
    /// the same jump will be made many times.
    pub fn jump_coefficients(j: usize, pow2: bool) -> Result<S::Words> {
        jump_coefficients::<S>(j, pow2)
    }

    /// Jumps ahead using precomputed `coeffs`, in a fixed number of steps.
    pub fn jump(&mut self, coeffs: &S::Words) {
        jump(&mut self.state, coeffs);
    }

    /// Jumps ahead by `j` steps.
    pub fn jump_by(&mut self, j: usize) -> Result<()> {
        let coeffs = Self::jump_coefficients(j, false)?;
        self.jump(&coeffs);
        Ok(())
    }

    /// Jumps ahead by `2^j` steps.
    pub fn jump_by_pow2(&mut self, j: usize) -> Result<()> {
        let coeffs = Self::jump_coefficients(j, true)?;
        self.jump(&coeffs);
        Ok(())
    }
}

impl<S: State + Default, X: Scrambler> Default for Generator<S, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, X: Scrambler> State for Generator<S, X> {
    type Word = S::Word;
    type Words = S::Words;

    fn key() -> StateKey {
        S::key()
    }

    fn name() -> String {
        format!("{}{}", S::name(), X::name())
    }

    #[inline(always)]
    fn word(&self, i: usize) -> S::Word {
        self.state.word(i)
    }

    fn words(&self) -> S::Words {
        self.state.words()
    }

    fn seed(&mut self, words: &[S::Word]) {
        self.state.seed(words);
    }

    #[inline(always)]
    fn step(&mut self) {
        self.state.step();
    }
}

impl<S: State + Index<usize, Output = <S as State>::Word>, X: Scrambler> Index<usize>
    for Generator<S, X>
{
    type Output = S::Word;

    fn index(&self, index: usize) -> &Self::Output {
        &self.state[index]
    }
}

impl<S: State, X: Scrambler> RngCore for Generator<S, X> {
    fn next_u32(&mut self) -> u32 {
        let word = self.next_word().to_u64();
        if S::Word::BITS > 32 {
            (word >> 32) as u32
        } else {
            word as u32
        }
    }

    fn next_u64(&mut self) -> u64 {
        if S::Word::BITS >= 64 {
            self.next_word().to_u64()
        } else {
            let hi = self.next_word().to_u64();
            let lo = self.next_word().to_u64();
            (hi << 32) | lo
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let size = (S::Word::BITS / 8) as usize;
        for chunk in dest.chunks_mut(size) {
            self.next_word().write_le_bytes(chunk);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<S: State, X: Scrambler> fmt::Display for Generator<S, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::name())
    }
}

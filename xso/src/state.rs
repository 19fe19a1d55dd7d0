use std::fmt;

use anyhow::Result;
use types::{Word, WordArray};

use super::characteristic_coefficients;

/// The two families of linear state transitions supported by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// Word-array shuffle, with a hand-written step formula per word count.
    Xoshiro,
    /// Ring buffer of words where only the first and final words are mixed on each step.
    Xoroshiro,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xoshiro => write!(f, "xoshiro"),
            Self::Xoroshiro => write!(f, "xoroshiro"),
        }
    }
}

/// Uniquely identifies a state transition: its family, shape, and step parameters.
///
/// Two states with equal keys have identical transition matrices, and therefore identical
/// characteristic polynomials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    pub family: Family,
    /// Number of words of state.
    pub words: usize,
    /// Number of bits per word of state.
    pub bits: u32,
    pub a: u32,
    pub b: u32,
    /// Only the [`Family::Xoroshiro`] transition has a third parameter.
    pub c: Option<u32>,
}

impl StateKey {
    /// Key for a [`Family::Xoshiro`] state.
    pub const fn xoshiro(words: usize, bits: u32, a: u32, b: u32) -> Self {
        Self {
            family: Family::Xoshiro,
            words,
            bits,
            a,
            b,
            c: None,
        }
    }

    /// Key for a [`Family::Xoroshiro`] state.
    pub const fn xoroshiro(words: usize, bits: u32, a: u32, b: u32, c: u32) -> Self {
        Self {
            family: Family::Xoroshiro,
            words,
            bits,
            a,
            b,
            c: Some(c),
        }
    }

    /// Total number of bits of state.
    pub const fn bit_count(&self) -> usize {
        self.words * self.bits as usize
    }
}

impl fmt::Display for StateKey {
    /// Formats as `family<NxW,A,B[,C]>`.
    ///
    /// # Example
    /// ```
    /// # use xso::StateKey;
    /// assert_eq!(StateKey::xoshiro(4, 64, 17, 45).to_string(), "xoshiro<4x64,17,45>");
    /// assert_eq!(StateKey::xoroshiro(2, 32, 26, 9, 13).to_string(), "xoroshiro<2x32,26,9,13>");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<{}x{},{},{}",
            self.family, self.words, self.bits, self.a, self.b
        )?;
        if let Some(c) = self.c {
            write!(f, ",{c}")?;
        }
        write!(f, ">")
    }
}

/// The state of a pseudo-random number generator: `N` words and a linear `step()` over GF(2).
///
/// Implementors must present their words in a canonical order through [`State::word`],
/// regardless of how they are stored internally, because the jump machinery reads and reseeds
/// the state through that view.
pub trait State: Clone + fmt::Debug {
    /// Type of each word of state.
    type Word: Word;

    /// The whole state as an array of words.
    type Words: WordArray<Word = Self::Word>;

    /// Number of words of state.
    const WORDS: usize = <Self::Words as WordArray>::LEN;

    /// Number of bits of state, which is also the degree of the characteristic polynomial.
    const BITS: usize = <Self::Words as WordArray>::BITS;

    /// Identifies the transition this state uses.
    fn key() -> StateKey;

    /// A human-readable name for this state.
    fn name() -> String {
        Self::key().to_string()
    }

    /// Read-only access to the `i`th word of state.
    ///
    /// # Panics
    /// If `i` is not less than [`State::WORDS`].
    fn word(&self, i: usize) -> Self::Word;

    /// Copies out the whole state in canonical order.
    fn words(&self) -> Self::Words {
        let mut words = <Self::Words as WordArray>::zeroed();
        for (i, word) in words.as_mut_slice().iter_mut().enumerate() {
            *word = self.word(i);
        }
        words
    }

    /// Overwrites the state with `words`, copied verbatim.
    ///
    /// If `words` is shorter than the state, only the leading words are replaced.
    /// The words should not all be zero, as the all-zero state never leaves itself.
    fn seed(&mut self, words: &[Self::Word]);

    /// Advances the state by one step.
    fn step(&mut self);

    /// Fetches the precomputed coefficients of `p(x)`, where the characteristic polynomial of
    /// this state's transition is `c(x) = x^n + p(x)`.
    ///
    /// Fails if nothing has been precomputed for [`State::key`].
    fn characteristic_coefficients() -> Result<Self::Words> {
        characteristic_coefficients(&Self::key())
    }
}

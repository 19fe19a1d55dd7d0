use std::fmt;

use types::Word;

use super::State;

/// Maps a generator's state to a single output word without modifying it.
///
/// Scramblers carry no data of their own. Everything they need is given as const parameters,
/// and multipliers are written as `u64` then truncated to the state's word width.
pub trait Scrambler: Clone + Copy + Default + fmt::Debug {
    /// Computes an output word from the current `state`.
    fn scramble<S: State>(&self, state: &S) -> S::Word;

    /// A human-readable name for this scrambler, including its parameters.
    fn name() -> String;
}

/// Outputs `s[W] * S`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Star<const S: u64, const W: usize>;

impl<const S: u64, const W: usize> Scrambler for Star<S, W> {
    #[inline(always)]
    fn scramble<St: State>(&self, state: &St) -> St::Word {
        state.word(W).wrapping_mul(St::Word::from_u64(S))
    }

    fn name() -> String {
        format!("star<{S:x},{W}>")
    }
}

/// Outputs `rotl(s[W] * S, R) * T`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct StarStar<const S: u64, const R: u32, const T: u64, const W: usize>;

impl<const S: u64, const R: u32, const T: u64, const W: usize> Scrambler for StarStar<S, R, T, W> {
    #[inline(always)]
    fn scramble<St: State>(&self, state: &St) -> St::Word {
        state
            .word(W)
            .wrapping_mul(St::Word::from_u64(S))
            .rotate_left(R)
            .wrapping_mul(St::Word::from_u64(T))
    }

    fn name() -> String {
        format!("star_star<{S:x},{R},{T:x},{W}>")
    }
}

/// Outputs `s[W0] + s[W1]`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Plus<const W0: usize, const W1: usize>;

impl<const W0: usize, const W1: usize> Scrambler for Plus<W0, W1> {
    #[inline(always)]
    fn scramble<St: State>(&self, state: &St) -> St::Word {
        state.word(W0).wrapping_add(state.word(W1))
    }

    fn name() -> String {
        format!("plus<{W0},{W1}>")
    }
}

/// Outputs `rotl(s[W0] + s[W1], R) + s[W0]`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct PlusPlus<const R: u32, const W0: usize, const W1: usize>;

impl<const R: u32, const W0: usize, const W1: usize> Scrambler for PlusPlus<R, W0, W1> {
    #[inline(always)]
    fn scramble<St: State>(&self, state: &St) -> St::Word {
        let w0 = state.word(W0);
        w0.wrapping_add(state.word(W1))
            .rotate_left(R)
            .wrapping_add(w0)
    }

    fn name() -> String {
        format!("plus_plus<{R},{W0},{W1}>")
    }
}

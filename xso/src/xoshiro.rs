use std::ops::Index;

use types::Word;

use super::{State, StateKey};

/// The "xoshiro" state transition: `N` words of type `T` shuffled among each other by XOR, with
/// one word shifted by `A` and another rotated by `B`.
///
/// Only `N = 4` and `N = 8` have a step formula. Naming any other `N` fails to build as soon as
/// the state is constructed or stepped.
///
/// # Example
/// ```
/// # use xso::{State, Xoshiro};
/// let mut state = Xoshiro::<u64, 4, 17, 45>::new();
/// state.step();
/// assert_eq!(state.words(), [1, 1, 1, 0]);
/// ```
///
/// Five words are rejected:
/// ```compile_fail
/// # use xso::Xoshiro;
/// let state = Xoshiro::<u64, 5, 1, 2>::new();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Xoshiro<T, const N: usize, const A: u32, const B: u32> {
    s: [T; N],
}

impl<T: Word, const N: usize, const A: u32, const B: u32> Xoshiro<T, N, A, B> {
    const SUPPORTED: () = assert!(N == 4 || N == 8, "xoshiro is only defined for 4 or 8 words");

    /// Creates a state holding `{1, 0, ..., 0}`.
    pub fn new() -> Self {
        let () = Self::SUPPORTED;
        let mut s = [T::ZERO; N];
        s[0] = T::ONE;
        Self { s }
    }

    /// Creates a state holding `words`, copied verbatim.
    pub fn from_words(words: [T; N]) -> Self {
        let () = Self::SUPPORTED;
        Self { s: words }
    }

    #[inline(always)]
    fn step4(s: &mut [T; N]) {
        let t = s[1] << A;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(B);
    }

    #[inline(always)]
    fn step8(s: &mut [T; N]) {
        let t = s[1] << A;

        s[2] ^= s[0];
        s[5] ^= s[1];
        s[1] ^= s[2];
        s[7] ^= s[3];
        s[3] ^= s[4];
        s[4] ^= s[5];
        s[0] ^= s[6];
        s[6] ^= s[7];

        s[6] ^= t;

        s[7] = s[7].rotate_left(B);
    }
}

impl<T: Word, const N: usize, const A: u32, const B: u32> Default for Xoshiro<T, N, A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Word, const N: usize, const A: u32, const B: u32> State for Xoshiro<T, N, A, B> {
    type Word = T;
    type Words = [T; N];

    fn key() -> StateKey {
        StateKey::xoshiro(N, T::BITS, A, B)
    }

    #[inline(always)]
    fn word(&self, i: usize) -> T {
        self.s[i]
    }

    #[inline(always)]
    fn words(&self) -> [T; N] {
        self.s
    }

    fn seed(&mut self, words: &[T]) {
        for (dst, src) in self.s.iter_mut().zip(words) {
            *dst = *src;
        }
    }

    #[inline(always)]
    fn step(&mut self) {
        let () = Self::SUPPORTED;
        if N == 4 {
            Self::step4(&mut self.s);
        } else {
            Self::step8(&mut self.s);
        }
    }
}

impl<T: Word, const N: usize, const A: u32, const B: u32> Index<usize> for Xoshiro<T, N, A, B> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.s[index]
    }
}

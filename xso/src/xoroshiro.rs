use std::ops::Index;

use types::Word;

use super::{State, StateKey};

/// The "xoroshiro" state transition: a ring buffer of `N` words of type `T` where each step only
/// mixes the first and final words, using the rotation `A`, shift `B` and rotation `C`.
///
/// With two words the step is written out directly. With more, the buffer is never shuffled.
/// Instead a cursor records which physical slot holds the final word and moves forward one slot
/// per step, so logical word `i` lives in slot `(i + last + 1) % N`.
///
/// # Example
/// ```
/// # use xso::{State, Xoroshiro};
/// let mut state = Xoroshiro::<u64, 16, 25, 27, 36>::new();
/// state.seed(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160]);
/// state.step();
/// // Untouched words shift down one place
/// assert_eq!(state.word(0), 20);
/// assert_eq!(state[13], 150);
/// assert_eq!(state[15], (160u64 ^ 10).rotate_left(36));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Xoroshiro<T, const N: usize, const A: u32, const B: u32, const C: u32> {
    s: [T; N],
    last: usize,
}

impl<T: Word, const N: usize, const A: u32, const B: u32, const C: u32> Xoroshiro<T, N, A, B, C> {
    const SUPPORTED: () = assert!(N >= 2, "xoroshiro needs at least 2 words");

    /// Creates a state holding `{1, 0, ..., 0}`.
    pub fn new() -> Self {
        let () = Self::SUPPORTED;
        let mut s = [T::ZERO; N];
        s[0] = T::ONE;
        Self { s, last: N - 1 }
    }

    /// Creates a state holding `words`, copied verbatim.
    pub fn from_words(words: [T; N]) -> Self {
        let () = Self::SUPPORTED;
        Self {
            s: words,
            last: N - 1,
        }
    }

    /// Physical slot of logical word `i`.
    #[inline(always)]
    const fn slot(&self, i: usize) -> usize {
        (i + self.last + 1) % N
    }

    #[inline(always)]
    fn shift_step(&mut self) {
        let s0 = self.s[0];
        let s1 = self.s[1] ^ s0;

        self.s[0] = s0.rotate_left(A) ^ s1 ^ (s1 << B);
        self.s[1] = s1.rotate_left(C);
    }

    #[inline(always)]
    fn rotate_step(&mut self) {
        let last = self.last;
        let first = (last + 1) % N;

        let s0 = self.s[first];
        let s1 = self.s[last] ^ s0;

        self.s[last] = s0.rotate_left(A) ^ s1 ^ (s1 << B);
        self.s[first] = s1.rotate_left(C);
        self.last = first;
    }
}

impl<T: Word, const N: usize, const A: u32, const B: u32, const C: u32> Default
    for Xoroshiro<T, N, A, B, C>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Word, const N: usize, const A: u32, const B: u32, const C: u32> State
    for Xoroshiro<T, N, A, B, C>
{
    type Word = T;
    type Words = [T; N];

    fn key() -> StateKey {
        StateKey::xoroshiro(N, T::BITS, A, B, C)
    }

    #[inline(always)]
    fn word(&self, i: usize) -> T {
        assert!(i < N, "word index {i} out of range for {N} words");
        self.s[self.slot(i)]
    }

    fn seed(&mut self, words: &[T]) {
        for (dst, src) in self.s.iter_mut().zip(words) {
            *dst = *src;
        }
        self.last = N - 1;
    }

    #[inline(always)]
    fn step(&mut self) {
        let () = Self::SUPPORTED;
        if N == 2 {
            self.shift_step();
        } else {
            self.rotate_step();
        }
    }
}

impl<T: Word, const N: usize, const A: u32, const B: u32, const C: u32> Index<usize>
    for Xoroshiro<T, N, A, B, C>
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < N, "word index {index} out of range for {N} words");
        &self.s[self.slot(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Ring = Xoroshiro<u64, 16, 25, 27, 36>;

    #[test]
    fn xoroshiro_2x64_matches_reference_step() {
        let mut state = Xoroshiro::<u64, 2, 24, 16, 37>::from_words([3, 5]);
        state.step();

        let s0 = 3u64;
        let s1 = 5u64 ^ s0;
        let expected = [s0.rotate_left(24) ^ s1 ^ (s1 << 16), s1.rotate_left(37)];
        assert_eq!(state.words(), expected);
    }

    #[test]
    fn ring_buffer_agrees_with_shuffled_array() {
        // Step an explicitly shuffled array alongside the ring buffer
        let mut shuffled: [u64; 16] = std::array::from_fn(|i| (i as u64 + 1) * 0x0101_0101);
        let mut state = Ring::from_words(shuffled);

        for _ in 0..40 {
            state.step();

            let s0 = shuffled[0];
            let s15 = shuffled[15] ^ s0;
            shuffled.rotate_left(1);
            shuffled[14] = s0.rotate_left(25) ^ s15 ^ (s15 << 27);
            shuffled[15] = s15.rotate_left(36);

            assert_eq!(state.words(), shuffled);
        }
    }

    #[test]
    fn words_and_seed_round_trip_after_rotation() {
        let mut state = Ring::new();
        for _ in 0..7 {
            state.step();
        }
        let words = state.words();

        let mut copy = Ring::new();
        copy.seed(&words);
        assert_eq!(copy.words(), words);

        for _ in 0..100 {
            state.step();
            copy.step();
        }
        assert_eq!(copy.words(), state.words());
    }

    #[test]
    fn seed_resets_cursor() {
        let mut state = Ring::new();
        state.step();
        state.step();
        state.seed(&std::array::from_fn::<u64, 16, _>(|i| i as u64));
        for i in 0..16 {
            assert_eq!(state[i], i as u64);
        }
    }

    #[test]
    #[should_panic]
    fn word_out_of_range_panics() {
        let state = Ring::new();
        state.word(16);
    }
}

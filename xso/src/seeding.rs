use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::OsRng, RngCore};
use types::Word;

/// Scrambles the bits of `x` with the 64-bit finalizer from MurmurHash3.
///
/// Nearby inputs map to very different outputs, which makes this a good first pass over a
/// low-entropy seed such as a small integer or a timestamp.
///
/// # Example
/// ```
/// # use xso::murmur_scramble64;
/// assert_eq!(murmur_scramble64(0), 0);
/// assert_eq!(murmur_scramble64(1), 0xb456bcfc34c2cb2c);
/// ```
pub const fn murmur_scramble64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ceb9fe1a85ec53);
    x ^= x >> 33;
    x
}

/// The SplitMix64 generator, used to expand a single seed word into a full state.
///
/// Source algorithm from <https://prng.di.unimi.it/splitmix64.c>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    /// Construct a new SplitMix64 generator with the given running state.
    pub const fn new(state: u64) -> Self {
        Self(state)
    }

    /// Generates the next pseudo-random number in the sequence.
    pub fn next(&mut self) -> u64 {
        let (result, s) = self.const_next();
        *self = s;
        result
    }

    /// `const` analog of [`SplitMix64::next`], returning `(next, Self)`.
    pub const fn const_next(self) -> (u64, Self) {
        let state = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        (z ^ (z >> 31), Self(state))
    }
}

/// Fills `words` from a single seed word: the seed is scrambled with [`murmur_scramble64`] and
/// then drives a [`SplitMix64`], whose outputs are truncated to the word width.
pub fn fill_from_word<T: Word>(seed: u64, words: &mut [T]) {
    let mut splitmix = SplitMix64::new(murmur_scramble64(seed));
    for word in words {
        *word = T::from_u64(splitmix.next());
    }
}

/// Fills `words` from the operating system's entropy source, then mixes a scrambled nanosecond
/// timestamp into the first word in case that source is weak.
pub fn fill_from_entropy<T: Word>(words: &mut [T]) {
    for word in words.iter_mut() {
        *word = if T::BITS <= 32 {
            T::from_u64(OsRng.next_u32() as u64)
        } else {
            let hi = OsRng.next_u32() as u64;
            let lo = OsRng.next_u32() as u64;
            T::from_u64((hi << 32) | lo)
        };
    }

    let ticks = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();

    if let Some(first) = words.first_mut() {
        *first ^= T::from_u64(murmur_scramble64(ticks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix_reference_outputs() {
        let mut splitmix = SplitMix64::new(0);
        assert_eq!(splitmix.next(), 0xe220a8397b1dcdaf);
        assert_eq!(splitmix.next(), 0x6e789e6aa1b965f4);
        assert_eq!(splitmix.next(), 0x06c45d188009454f);
    }

    #[test]
    fn const_next_matches_next() {
        let mut a = SplitMix64::new(1234);
        let (x, b) = SplitMix64::new(1234).const_next();
        assert_eq!(a.next(), x);
        assert_eq!(a, b);
    }

    #[test]
    fn word_seeding_truncates() {
        let mut wide = [0u64; 4];
        let mut narrow = [0u32; 4];
        fill_from_word(42, &mut wide);
        fill_from_word(42, &mut narrow);

        assert_eq!(
            wide,
            [
                0x28f97397307ba432,
                0xdff75cf2abbf3d96,
                0xf2c1a581be0d6300,
                0x1814a3faf7252909
            ]
        );
        for (w, n) in wide.iter().zip(narrow) {
            assert_eq!(*w as u32, n);
        }
    }

    #[test]
    fn entropy_seeding_is_not_zero() {
        let mut a = [0u64; 4];
        let mut b = [0u64; 4];
        fill_from_entropy(&mut a);
        fill_from_entropy(&mut b);
        assert!(a.iter().any(|&w| w != 0));
        assert_ne!(a, b);
    }
}

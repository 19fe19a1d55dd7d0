use super::{Word, WordArray};

/// Riffles a word into two words holding its bits interleaved with zeros.
///
/// With an 8-bit word `src = hgfedcba` (bit 0 on the right), the low half `dcba` is spread into
/// `lo = 0d0c0b0a` and the high half `hgfe` into `hi = 0h0g0f0e`.
///
/// Over GF(2), squaring a polynomial spreads its coefficients out in exactly this way, because
/// every cross term picks up a factor of two.
///
/// # Example
/// ```
/// # use types::riffle;
/// assert_eq!(riffle(0xFFFF_0003u32), (0b0101, 0x5555_5555));
/// ```
pub fn riffle<T: Word>(src: T) -> (T, T) {
    let half = T::BITS / 2;

    let mut lo = src & (T::MAX >> half);
    let mut hi = src >> half;

    // Each pass doubles the spacing between the blocks of bits, ending with alternate single bits
    let mut i = T::BITS / 4;
    while i > 0 {
        let mask = T::MAX / ((T::ONE << i) | T::ONE);
        lo = (lo ^ (lo << i)) & mask;
        hi = (hi ^ (hi << i)) & mask;
        i /= 2;
    }

    (lo, hi)
}

/// Riffles every word of `src` into a double-length bit-vector, returned as its `(lo, hi)` halves.
///
/// Treating `[lo | hi]` as contiguous storage, word `i` of `src` lands in words `2i` and `2i + 1`,
/// so bit `k` of `src` ends up at bit `2k` of the result.
///
/// # Example
/// ```
/// # use types::riffle_words;
/// let (lo, hi) = riffle_words(&[0b11u32, 1 << 31]);
/// assert_eq!(lo, [0b101, 0]);
/// assert_eq!(hi, [0, 1 << 30]);
/// ```
pub fn riffle_words<A: WordArray>(src: &A) -> (A, A) {
    let mut lo = A::zeroed();
    let mut hi = A::zeroed();

    for (i, &word) in src.as_slice().iter().enumerate() {
        let (x, y) = riffle(word);
        for (index, value) in [(2 * i, x), (2 * i + 1, y)] {
            if index < A::LEN {
                lo.as_mut_slice()[index] = value;
            } else {
                hi.as_mut_slice()[index - A::LEN] = value;
            }
        }
    }

    (lo, hi)
}

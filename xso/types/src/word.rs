use std::{
    fmt,
    hash::Hash,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, Not, Shl, Shr,
    },
};

/// An unsigned machine word that generator state is packed into.
///
/// In practice this is only ever `u32` or `u64`, but the jump machinery is written against this
/// trait so that both widths share a single implementation.
pub trait Word:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Number of bits in this word.
    const BITS: u32;

    /// A word with no bits set.
    const ZERO: Self;

    /// A word with only the lowest bit set.
    const ONE: Self;

    /// A word with every bit set.
    const MAX: Self;

    /// Rotates the bits of this word left by `n` places.
    fn rotate_left(self, n: u32) -> Self;

    /// Addition modulo `2^BITS`.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplication modulo `2^BITS`.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Number of trailing zero bits.
    fn trailing_zeros(self) -> u32;

    /// Number of leading zero bits.
    fn leading_zeros(self) -> u32;

    /// Truncates a `u64` down to this word's width.
    fn from_u64(x: u64) -> Self;

    /// Widens (or reinterprets) this word as a `u64`.
    fn to_u64(self) -> u64;

    /// Writes the little-endian bytes of this word into `dst`, truncating if `dst` is short.
    fn write_le_bytes(self, dst: &mut [u8]);

    /// A word with only bit `index` set.
    ///
    /// # Example
    /// ```
    /// # use types::Word;
    /// assert_eq!(<u32 as Word>::bit(4), 0b10000);
    /// ```
    fn bit(index: u32) -> Self {
        Self::ONE << index
    }

    /// Returns `true` if bit `index` of this word is set.
    fn test(self, index: u32) -> bool {
        self & Self::bit(index) != Self::ZERO
    }

    /// Returns `true` if the most significant bit of this word is set.
    fn top_bit(self) -> bool {
        self.test(Self::BITS - 1)
    }
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn rotate_left(self, n: u32) -> Self {
                    <$t>::rotate_left(self, n)
                }

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline(always)]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline(always)]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline(always)]
                fn from_u64(x: u64) -> Self {
                    x as $t
                }

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                fn write_le_bytes(self, dst: &mut [u8]) {
                    let bytes = self.to_le_bytes();
                    let len = dst.len().min(bytes.len());
                    dst[..len].copy_from_slice(&bytes[..len]);
                }
            }
        )*
    };
}

impl_word!(u32, u64);

/// A fixed-length array of [`Word`]s, viewed as a packed bit-vector.
///
/// Bit `i` of the vector lives in word `i / W` at position `i % W`, where `W` is the word width.
/// When the array holds polynomial coefficients, bit `i` is the coefficient of `x^i`.
pub trait WordArray:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Type of each word in the array.
    type Word: Word;

    /// Number of words in the array.
    const LEN: usize;

    /// Total number of bits in the array.
    const BITS: usize = Self::LEN * <Self::Word as Word>::BITS as usize;

    /// An array with every word set to zero.
    fn zeroed() -> Self;

    /// The words of this array, lowest first.
    fn as_slice(&self) -> &[Self::Word];

    /// Mutable access to the words of this array, lowest first.
    fn as_mut_slice(&mut self) -> &mut [Self::Word];

    /// An array with only bit `index` set.
    ///
    /// # Example
    /// ```
    /// # use types::WordArray;
    /// let unit = <[u32; 2]>::unit(33);
    /// assert_eq!(unit, [0, 2]);
    /// ```
    fn unit(index: usize) -> Self {
        let mut words = Self::zeroed();
        words.set(index);
        words
    }

    /// Builds an array from a slice of words, zero-filling if `words` is short.
    fn from_slice(words: &[Self::Word]) -> Self {
        let mut array = Self::zeroed();
        for (dst, src) in array.as_mut_slice().iter_mut().zip(words) {
            *dst = *src;
        }
        array
    }

    /// Returns `true` if bit `index` is set.
    fn test(&self, index: usize) -> bool {
        let (word, bit) = locate::<Self::Word>(index);
        self.as_slice()[word].test(bit)
    }

    /// Sets bit `index`.
    fn set(&mut self, index: usize) {
        let (word, bit) = locate::<Self::Word>(index);
        self.as_mut_slice()[word] |= Self::Word::bit(bit);
    }

    /// Returns `true` if no bits are set.
    fn is_zero(&self) -> bool {
        self.as_slice().iter().all(|&w| w == Self::Word::ZERO)
    }

    /// Adds `rhs` to `self`, which over GF(2) is a word-by-word XOR.
    fn xor_assign(&mut self, rhs: &Self) {
        for (lhs, rhs) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *lhs ^= *rhs;
        }
    }

    /// Shifts every bit up by one place, returning the bit that fell off the top.
    ///
    /// Viewed as polynomial coefficients this multiplies by `x` and reports whether the product
    /// reached degree [`WordArray::BITS`].
    ///
    /// # Example
    /// ```
    /// # use types::WordArray;
    /// let mut words: [u32; 2] = [0x8000_0001, 0x8000_0000];
    /// assert!(words.shift_up());
    /// assert_eq!(words, [0x0000_0002, 0x0000_0001]);
    /// ```
    fn shift_up(&mut self) -> bool {
        let complement = <Self::Word as Word>::BITS - 1;
        let words = self.as_mut_slice();
        let carry = words[words.len() - 1].top_bit();
        for i in (1..words.len()).rev() {
            words[i] = (words[i] << 1) | (words[i - 1] >> complement);
        }
        words[0] = words[0] << 1;
        carry
    }

    /// Index of the lowest set bit, if any.
    fn first_set(&self) -> Option<usize> {
        let bits = <Self::Word as Word>::BITS as usize;
        self.as_slice()
            .iter()
            .enumerate()
            .find(|(_, w)| **w != Self::Word::ZERO)
            .map(|(i, w)| i * bits + w.trailing_zeros() as usize)
    }

    /// Index of the highest set bit, if any.
    fn last_set(&self) -> Option<usize> {
        let bits = <Self::Word as Word>::BITS as usize;
        self.as_slice()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != Self::Word::ZERO)
            .map(|(i, w)| i * bits + (bits - 1 - w.leading_zeros() as usize))
    }

    /// An iterator over the indices of all set bits, lowest first.
    ///
    /// # Example
    /// ```
    /// # use types::WordArray;
    /// let words: [u32; 2] = [0b101, 0b1];
    /// assert_eq!(words.ones().collect::<Vec<_>>(), vec![0, 2, 32]);
    /// ```
    fn ones(&self) -> Ones<'_, Self::Word> {
        Ones::new(self.as_slice())
    }
}

impl<T: Word, const N: usize> WordArray for [T; N] {
    type Word = T;
    const LEN: usize = N;

    fn zeroed() -> Self {
        [T::ZERO; N]
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// Splits a global bit index into a `(word, bit)` pair.
#[inline(always)]
const fn locate<T: Word>(index: usize) -> (usize, u32) {
    let bits = T::BITS as usize;
    (index / bits, (index % bits) as u32)
}

/// Iterator over the set bits of a word slice, produced by [`WordArray::ones`].
#[derive(Debug, Clone)]
pub struct Ones<'a, T> {
    words: &'a [T],
    index: usize,
    current: T,
}

impl<'a, T: Word> Ones<'a, T> {
    fn new(words: &'a [T]) -> Self {
        let current = words.first().copied().unwrap_or(T::ZERO);
        Self {
            words,
            index: 0,
            current,
        }
    }
}

impl<T: Word> Iterator for Ones<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == T::ZERO {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }

        let bit = self.current.trailing_zeros();
        // Clear the lowest set bit
        self.current &= !T::bit(bit);
        Some(self.index * T::BITS as usize + bit as usize)
    }
}

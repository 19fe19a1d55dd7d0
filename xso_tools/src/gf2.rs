use std::{
    fmt,
    ops::{BitXor, BitXorAssign},
};

use anyhow::{bail, Result};
use log::debug;
use xso::{State, WordArray};

const WORD: usize = u64::BITS as usize;

#[inline(always)]
fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD)
}

#[inline(always)]
fn get_bit(words: &[u64], i: usize) -> bool {
    (words[i / WORD] >> (i % WORD)) & 1 == 1
}

#[inline(always)]
fn flip_bit(words: &mut [u64], i: usize) {
    words[i / WORD] ^= 1 << (i % WORD);
}

/// Square matrix over GF(2), with each row packed into `u64`s.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    size: usize,
    rows: Vec<Vec<u64>>,
}

impl BitMatrix {
    /// A `size x size` matrix of zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            rows: vec![vec![0; words_for(size)]; size],
        }
    }

    /// The `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size);
        for i in 0..size {
            m.set(i, i, true);
        }
        m
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at row `r` and column `c`.
    pub fn get(&self, r: usize, c: usize) -> bool {
        get_bit(&self.rows[r], c)
    }

    /// Sets the entry at row `r` and column `c`.
    pub fn set(&mut self, r: usize, c: usize, value: bool) {
        if self.get(r, c) != value {
            flip_bit(&mut self.rows[r], c);
        }
    }

    /// Multiplies this matrix by the column vector held in `v`.
    pub fn apply<A: WordArray>(&self, v: &A) -> A {
        assert_eq!(A::BITS, self.size, "vector length does not match matrix");
        let mut result = A::zeroed();
        for (r, row) in self.rows.iter().enumerate() {
            let parity = v.ones().filter(|&c| get_bit(row, c)).count() % 2;
            if parity == 1 {
                result.set(r);
            }
        }
        result
    }

    /// Matrix product `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        assert_eq!(self.size, rhs.size, "matrix sizes differ");
        let mut product = Self::zeros(self.size);
        for (dst, row) in product.rows.iter_mut().zip(&self.rows) {
            for k in (0..self.size).filter(|&k| get_bit(row, k)) {
                for (d, s) in dst.iter_mut().zip(&rhs.rows[k]) {
                    *d ^= s;
                }
            }
        }
        product
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                write!(f, "{}", if self.get(r, c) { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The transition matrix `T` of a state, so that stepping a state `s` gives `T * s`.
///
/// Column `j` is found by stepping the state holding only bit `j` once.
pub fn transition_matrix<S: State + Default>() -> BitMatrix {
    let mut matrix = BitMatrix::zeros(S::BITS);
    for j in 0..S::BITS {
        let mut state = S::default();
        state.seed(S::Words::unit(j).as_slice());
        state.step();
        for i in state.words().ones() {
            matrix.set(i, j, true);
        }
    }
    matrix
}

/// Polynomial over GF(2), with bit `i` holding the coefficient of `x^i`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitPoly {
    words: Vec<u64>,
}

impl BitPoly {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The polynomial `1`.
    pub fn one() -> Self {
        Self::monomial(0)
    }

    /// The polynomial `x^k`.
    pub fn monomial(k: usize) -> Self {
        let mut words = vec![0; k / WORD + 1];
        flip_bit(&mut words, k);
        Self { words }
    }

    /// Builds a polynomial from packed coefficient words.
    pub fn from_words(words: &[u64]) -> Self {
        let mut poly = Self {
            words: words.to_vec(),
        };
        poly.trim();
        poly
    }

    /// Builds a polynomial whose coefficients are the bits of `words`, lowest first.
    pub fn from_word_array<A: WordArray>(words: &A) -> Self {
        let mut poly = Self::zero();
        for i in words.ones() {
            poly ^= &Self::monomial(i);
        }
        poly
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }

    /// Degree of this polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        let top = self.words.last()?;
        Some((self.words.len() - 1) * WORD + (WORD - 1 - top.leading_zeros() as usize))
    }

    /// Coefficient of `x^i`.
    pub fn coeff(&self, i: usize) -> bool {
        i / WORD < self.words.len() && get_bit(&self.words, i)
    }

    /// Returns `true` if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// The low `A::BITS` coefficients, packed into an `A` and truncated to its word width.
    pub fn to_words<A: WordArray>(&self) -> A {
        let mut words = A::zeroed();
        for i in (0..A::BITS).filter(|&i| self.coeff(i)) {
            words.set(i);
        }
        words
    }

    /// This polynomial times `x^k`.
    pub fn shifted(&self, k: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let (whole, part) = (k / WORD, (k % WORD) as u32);
        let mut words = vec![0; whole + self.words.len() + 1];
        for (i, &w) in self.words.iter().enumerate() {
            words[whole + i] ^= w << part;
            if part > 0 {
                words[whole + i + 1] ^= w >> (WORD as u32 - part);
            }
        }

        let mut poly = Self { words };
        poly.trim();
        poly
    }

    /// Product of two polynomials.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut product = Self::zero();
        for i in (0..rhs.words.len() * WORD).filter(|&i| rhs.coeff(i)) {
            product ^= &self.shifted(i);
        }
        product
    }

    /// Remainder after division by `m`.
    ///
    /// # Panics
    /// If `m` is zero.
    pub fn rem(&self, m: &Self) -> Self {
        let Some(dm) = m.degree() else {
            panic!("division by the zero polynomial");
        };

        let mut r = self.clone();
        while let Some(dr) = r.degree() {
            if dr < dm {
                break;
            }
            r ^= &m.shifted(dr - dm);
        }
        r
    }

    /// Computes `x^j mod c(x)`, or `x^(2^j) mod c(x)` if `pow2` is set, by plain long division.
    pub fn reduce_x_pow(j: usize, pow2: bool, c: &Self) -> Self {
        let x = Self::monomial(1).rem(c);
        if pow2 {
            let mut r = x;
            for _ in 0..j {
                r = r.mul(&r).rem(c);
            }
            return r;
        }

        let mut r = Self::one().rem(c);
        for bit in (0..usize::BITS).rev() {
            r = r.mul(&r).rem(c);
            if (j >> bit) & 1 == 1 {
                r = r.mul(&x).rem(c);
            }
        }
        r
    }
}

impl BitXorAssign<&BitPoly> for BitPoly {
    fn bitxor_assign(&mut self, rhs: &BitPoly) {
        if self.words.len() < rhs.words.len() {
            self.words.resize(rhs.words.len(), 0);
        }
        for (lhs, rhs) in self.words.iter_mut().zip(&rhs.words) {
            *lhs ^= rhs;
        }
        self.trim();
    }
}

impl BitXor for &BitPoly {
    type Output = BitPoly;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut sum = self.clone();
        sum ^= rhs;
        sum
    }
}

impl fmt::Debug for BitPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(degree) = self.degree() else {
            return write!(f, "0");
        };

        let terms: Vec<String> = (0..=degree)
            .rev()
            .filter(|&i| self.coeff(i))
            .map(|i| match i {
                0 => "1".to_string(),
                1 => "x".to_string(),
                _ => format!("x^{i}"),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}

/// Characteristic polynomial of `matrix`, found by reducing it to Frobenius normal form with the
/// Danilevsky algorithm.
///
/// Works upwards from the bottom row, using similarity transforms to turn each row into a unit
/// row just below the diagonal. When no pivot can be found the matrix splits into blocks, and the
/// result is the product of the blocks' companion polynomials.
pub fn characteristic_polynomial(matrix: &BitMatrix) -> BitPoly {
    let mut a = matrix.rows.clone();
    let mut result = BitPoly::one();

    let mut size = matrix.size;
    while size > 0 {
        let mut k = size - 1;
        while k > 0 {
            if !get_bit(&a[k], k - 1) {
                // Pivot on the lowest set entry left of the subdiagonal
                let Some(j) = (0..k - 1).find(|&j| get_bit(&a[k], j)) else {
                    break;
                };

                a.swap(j, k - 1);
                for row in a.iter_mut().take(size) {
                    if get_bit(row, j) != get_bit(row, k - 1) {
                        flip_bit(row, j);
                        flip_bit(row, k - 1);
                    }
                }
            }

            // Clear row k except for its subdiagonal entry
            let mut mask = vec![0; a[k].len()];
            for c in (0..size).filter(|&c| c != k - 1 && get_bit(&a[k], c)) {
                flip_bit(&mut mask, c);
            }

            if mask.iter().any(|&w| w != 0) {
                for row in a.iter_mut().take(size) {
                    if get_bit(row, k - 1) {
                        for (dst, src) in row.iter_mut().zip(&mask) {
                            *dst ^= src;
                        }
                    }
                }

                let mut acc = vec![0; a[k].len()];
                for j in (0..size).filter(|&j| get_bit(&mask, j)) {
                    for (dst, src) in acc.iter_mut().zip(&a[j]) {
                        *dst ^= src;
                    }
                }
                for (dst, src) in a[k - 1].iter_mut().zip(&acc) {
                    *dst ^= src;
                }
            }

            k -= 1;
        }

        // Rows k..size now form a companion block whose coefficients sit in row k
        let m = size - k;
        let mut block = BitPoly::monomial(m);
        for t in (0..m).filter(|&t| get_bit(&a[k], k + t)) {
            block ^= &BitPoly::monomial(m - 1 - t);
        }
        debug!("Split off a block of degree {m}");

        result = result.mul(&block);
        size = k;
    }

    result
}

/// Derives the low-order coefficients `p(x)` of the characteristic polynomial
/// `c(x) = x^n + p(x)` of the state `S` from scratch.
pub fn characteristic_coefficients<S: State + Default>() -> Result<S::Words> {
    let c = characteristic_polynomial(&transition_matrix::<S>());
    if c.degree() != Some(S::BITS) {
        bail!(
            "Characteristic polynomial of {} has degree {:?}, expected {}",
            S::name(),
            c.degree(),
            S::BITS
        );
    }
    Ok(c.to_words())
}

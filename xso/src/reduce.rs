use types::{riffle_words, WordArray};

/// Arithmetic modulo a characteristic polynomial `c(x) = x^n + p(x)` over GF(2), where
/// `n = A::BITS`.
///
/// Polynomials of degree below `n` are packed into an `A` with bit `i` holding the coefficient of
/// `x^i`. Construction precomputes `x^(n+i) mod c(x)` for every `i` in `0..n`, which turns each
/// squaring into one riffle plus a handful of XORs.
#[derive(Clone, Debug)]
pub struct Reducer<A: WordArray> {
    p: A,
    power_mod: Vec<A>,
}

impl<A: WordArray> Reducer<A> {
    /// Prepares to reduce modulo `x^n + p(x)`.
    pub fn new(p: A) -> Self {
        let mut power_mod = Vec::with_capacity(A::BITS);
        let mut power = p;
        for _ in 0..A::BITS {
            power_mod.push(power);
            Self::fold_times_x(&p, &mut power);
        }
        Self { p, power_mod }
    }

    /// The polynomial `p(x)` that this reducer was built from.
    pub fn p(&self) -> &A {
        &self.p
    }

    /// `x^(n + i) mod c(x)`.
    ///
    /// # Panics
    /// If `i` is not less than `n`.
    pub fn power_mod(&self, i: usize) -> &A {
        &self.power_mod[i]
    }

    #[inline(always)]
    fn fold_times_x(p: &A, r: &mut A) {
        // x^n = p(x) (mod c)
        if r.shift_up() {
            r.xor_assign(p);
        }
    }

    /// Replaces `r` with `r(x) * x mod c(x)`.
    pub fn times_x(&self, r: &mut A) {
        Self::fold_times_x(&self.p, r);
    }

    /// Replaces `r` with `r(x)^2 mod c(x)`.
    pub fn square(&self, r: &mut A) {
        let (mut lo, hi) = riffle_words(r);
        for i in hi.ones() {
            lo.xor_assign(&self.power_mod[i]);
        }
        *r = lo;
    }

    /// Computes `x^j mod c(x)`, or `x^(2^j) mod c(x)` when `pow2` is set.
    pub fn reduce(&self, j: usize, pow2: bool) -> A {
        if pow2 {
            let mut r = A::unit(1);
            for _ in 0..j {
                self.square(&mut r);
            }
            return r;
        }

        if j < A::BITS {
            return A::unit(j);
        }
        if j == A::BITS {
            return self.p;
        }

        // Left-to-right binary exponentiation, starting from the leading bit of j
        let mut r = A::unit(1);
        let top = usize::BITS - 1 - j.leading_zeros();
        for bit in (0..top).rev() {
            self.square(&mut r);
            if (j >> bit) & 1 == 1 {
                self.times_x(&mut r);
            }
        }
        r
    }
}

/// Computes `x^j mod c(x)` (or `x^(2^j) mod c(x)` if `pow2` is set) where `c(x) = x^n + p(x)` and
/// `n` is the number of bits in `A`.
///
/// # Example
/// ```
/// # use xso::reduce;
/// let p: [u64; 2] = [0x95b8f76579aa001, 0x8828e513b43d5];
/// assert_eq!(reduce(&p, 0, false), [1, 0]);
/// assert_eq!(reduce(&p, 0, true), [2, 0]);
/// assert_eq!(reduce(&p, 128, false), p);
/// assert_eq!(reduce(&p, 64, true), [0xdf900294d8f554a5, 0x170865df4b3201fc]);
/// ```
pub fn reduce<A: WordArray>(p: &A, j: usize, pow2: bool) -> A {
    Reducer::new(*p).reduce(j, pow2)
}

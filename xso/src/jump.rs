use anyhow::Result;
use log::debug;
use types::WordArray;

use super::{Reducer, State};

/// Computes the jump polynomial that advances an `S` by `j` steps, or by `2^j` steps if `pow2` is
/// set.
///
/// The result is only meaningful to [`jump`] on the same kind of state.
/// Fails if `S` has no precomputed characteristic polynomial.
///
/// # Example
/// ```
/// # use xso::{jump_coefficients, Xoshiro4x64};
/// // The well-known xoshiro256 JUMP constants advance by 2^128 steps
/// let coeffs = jump_coefficients::<Xoshiro4x64>(128, true).unwrap();
/// assert_eq!(coeffs[0], 0x180ec6d33cfd0aba);
/// ```
pub fn jump_coefficients<S: State>(j: usize, pow2: bool) -> Result<S::Words> {
    let p = S::characteristic_coefficients()?;
    debug!(
        "Computing jump coefficients for {} by {}{j}",
        S::name(),
        if pow2 { "2^" } else { "" }
    );
    Ok(Reducer::new(p).reduce(j, pow2))
}

/// Advances `state` by however many steps `coeffs` encodes.
///
/// With `r(x) = sum(r_i * x^i)` the new state is `sum(r_i * T^i * s)`, where `T` is the transition
/// and `s` the current state. Each term is picked up while stepping through the `n` states
/// following `s`, so this always costs exactly `n` calls to [`State::step`].
pub fn jump<S: State>(state: &mut S, coeffs: &S::Words) {
    let mut acc = S::Words::zeroed();
    for i in 0..S::BITS {
        if coeffs.test(i) {
            acc.xor_assign(&state.words());
        }
        state.step();
    }
    state.seed(acc.as_slice());
}

use std::fmt;

use clap::ValueEnum;

/// Linear algebra over GF(2), used to derive characteristic polynomials from scratch.
pub mod gf2;

pub use gf2::*;

/// The preferred states, as they can be chosen on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum StateChoice {
    Xoshiro4x32,
    Xoshiro4x64,
    Xoshiro8x64,
    Xoroshiro2x32,
    Xoroshiro2x64,
    Xoroshiro2x64b,
    Xoroshiro16x64,
}

impl StateChoice {
    /// Every choice, in table order.
    pub const ALL: [Self; 7] = [
        Self::Xoshiro4x32,
        Self::Xoshiro4x64,
        Self::Xoshiro8x64,
        Self::Xoroshiro2x32,
        Self::Xoroshiro2x64,
        Self::Xoroshiro2x64b,
        Self::Xoroshiro16x64,
    ];
}

/// Evaluates `$body` with the type alias `$s` bound to the state picked by a [`StateChoice`].
///
/// # Example
/// ```
/// # use xso_tools::{for_state, StateChoice};
/// let bits = for_state!(StateChoice::Xoroshiro16x64, S => <S as xso::State>::BITS);
/// assert_eq!(bits, 1024);
/// ```
#[macro_export]
macro_rules! for_state {
    ($choice:expr, $s:ident => $body:expr) => {
        match $choice {
            $crate::StateChoice::Xoshiro4x32 => {
                type $s = xso::Xoshiro4x32;
                $body
            }
            $crate::StateChoice::Xoshiro4x64 => {
                type $s = xso::Xoshiro4x64;
                $body
            }
            $crate::StateChoice::Xoshiro8x64 => {
                type $s = xso::Xoshiro8x64;
                $body
            }
            $crate::StateChoice::Xoroshiro2x32 => {
                type $s = xso::Xoroshiro2x32;
                $body
            }
            $crate::StateChoice::Xoroshiro2x64 => {
                type $s = xso::Xoroshiro2x64;
                $body
            }
            $crate::StateChoice::Xoroshiro2x64b => {
                type $s = xso::Xoroshiro2x64b;
                $body
            }
            $crate::StateChoice::Xoroshiro16x64 => {
                type $s = xso::Xoroshiro16x64;
                $body
            }
        }
    };
}

impl fmt::Display for StateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = for_state!(*self, S => <S as xso::State>::name());
        write!(f, "{name}")
    }
}

/// Formats words as hex, the way they would be written in a Rust array literal.
pub fn hex_words<W: xso::Word>(words: &[W]) -> String {
    let digits = (W::BITS / 4) as usize;
    words
        .iter()
        .map(|w| format!("{w:#0width$x}", width = digits + 2))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_display_their_state() {
        assert_eq!(StateChoice::Xoshiro4x64.to_string(), "xoshiro<4x64,17,45>");
        assert_eq!(
            StateChoice::Xoroshiro2x64b.to_string(),
            "xoroshiro<2x64,49,21,28>"
        );
    }

    #[test]
    fn hex_words_are_zero_padded() {
        assert_eq!(hex_words(&[1u32, 0xabc]), "0x00000001, 0x00000abc");
        assert_eq!(hex_words(&[u64::MAX]), "0xffffffffffffffff");
    }
}

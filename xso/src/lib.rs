//! Scrambled linear pseudo-random number generators from the xoshiro/xoroshiro families, with
//! fast jump-ahead.
//!
//! A [`Generator`] pairs a linear [`State`] with a [`Scrambler`]. Because the state transition is
//! linear over GF(2), the generator can be advanced by any number of steps (`2^100`, say) by
//! reducing `x^J` modulo the transition's characteristic polynomial and then making exactly `n`
//! ordinary steps, where `n` is the number of bits of state.
pub use types::*;

/// Precomputed characteristic polynomials for each supported state transition.
pub mod characteristic;
/// Pseudo-random number generators built from a state and a scrambler.
pub mod generator;
/// Jumping a state ahead by an arbitrary number of steps.
pub mod jump;
/// Splitting one generator into many non-overlapping streams.
pub mod partition;
/// Type aliases for the preferred states and generators.
pub mod presets;
/// Reduction of `x^J` modulo a characteristic polynomial.
pub mod reduce;
/// Functions that map a state to a single output word.
pub mod scrambler;
/// Filling a state from a seed word or from system entropy.
pub mod seeding;
/// The [`State`] trait shared by every state transition (and every generator).
pub mod state;
/// The ring-buffer state transition.
pub mod xoroshiro;
/// The word-shuffling state transition.
pub mod xoshiro;

pub use characteristic::*;
pub use generator::*;
pub use jump::*;
pub use partition::*;
pub use presets::*;
pub use reduce::*;
pub use scrambler::*;
pub use seeding::*;
pub use state::*;
pub use xoroshiro::*;
pub use xoshiro::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::generator::*;
    pub use crate::jump::*;
    pub use crate::partition::*;
    pub use crate::presets::*;
    pub use crate::scrambler::*;
    pub use crate::state::*;
    pub use crate::xoroshiro::*;
    pub use crate::xoshiro::*;
    pub use rand::{Rng as _, RngCore};
    pub use types::{Word, WordArray};
}

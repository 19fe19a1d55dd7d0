use anyhow::{bail, Result};
use log::debug;
use types::{Word, WordArray};

use super::StateKey;

/// Low-order coefficients of the characteristic polynomial `c(x) = x^n + p(x)` of each supported
/// state transition, packed with bit `i` holding the coefficient of `x^i`.
///
/// Words are stored as `u64` regardless of the state's word width.
/// These were derived with `cargo run --bin characteristic_words` in `xso_tools`.
pub const CHARACTERISTIC_COEFFICIENTS: &[(StateKey, &[u64])] = &[
    (
        StateKey::xoshiro(4, 32, 9, 11),
        &[0xde18fc01, 0x1b489db6, 0x6254b1, 0xfc65a2],
    ),
    (
        StateKey::xoshiro(4, 64, 17, 45),
        &[
            0x9d116f2bb0f0f001,
            0x280002bcefd1a5e,
            0x4b4edcf26259f85,
            0x3c03c3f3ecb19,
        ],
    ),
    (
        StateKey::xoshiro(8, 64, 11, 21),
        &[
            0xcf3cff0c00000001,
            0x7fdc78d886f00c63,
            0xf05e63fca6d7b781,
            0x7a67058e7bbab6f0,
            0xf11eef832e32518f,
            0x51ba7c47edc758ad,
            0x8f2d27268ce4b20b,
            0x500055d8b77f,
        ],
    ),
    (
        StateKey::xoroshiro(2, 32, 26, 9, 13),
        &[0x6e2286c1, 0x53be9da],
    ),
    (
        StateKey::xoroshiro(2, 64, 24, 16, 37),
        &[0x95b8f76579aa001, 0x8828e513b43d5],
    ),
    (
        StateKey::xoroshiro(2, 64, 49, 21, 28),
        &[0x8dae70779760b081, 0x31bcf2f855d6e5],
    ),
    (
        StateKey::xoroshiro(16, 64, 25, 27, 36),
        &[
            0x5cfeb8cc48ddb211,
            0xb73e379d035a06dd,
            0x17d5100a20a0350e,
            0x7550223f68f98cac,
            0x29d373b5c5ed3459,
            0x3689b412ef70de48,
            0xa1d3b6ee079a7cc6,
            0x9bf0b669abd100f8,
            0x955c84e105f60997,
            0x6ca140c61889cddd,
            0xabaf68c5fc3a0e4a,
            0xa46134526b83adc5,
            0x710704d05683d63,
            0x580d080b44b606a2,
            0x8040a0580158a1,
            0x800081,
        ],
    ),
];

/// Looks up the raw table entry for `key`, if there is one.
pub fn lookup(key: &StateKey) -> Option<&'static [u64]> {
    CHARACTERISTIC_COEFFICIENTS
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, words)| *words)
}

/// Fetches the coefficients of `p(x)` for the state transition identified by `key`, packed into
/// an array of words.
///
/// Fails if the table has no entry for `key`, or if `A` does not have the word count and width
/// that `key` describes.
///
/// # Example
/// ```
/// # use xso::{characteristic_coefficients, StateKey};
/// let p: [u32; 2] = characteristic_coefficients(&StateKey::xoroshiro(2, 32, 26, 9, 13)).unwrap();
/// assert_eq!(p, [0x6e2286c1, 0x53be9da]);
///
/// assert!(characteristic_coefficients::<[u64; 4]>(&StateKey::xoshiro(4, 64, 1, 2)).is_err());
/// ```
pub fn characteristic_coefficients<A: WordArray>(key: &StateKey) -> Result<A> {
    if key.words != A::LEN || key.bits != <A::Word as Word>::BITS {
        bail!(
            "{key} does not fit in {} words of {} bits",
            A::LEN,
            <A::Word as Word>::BITS
        );
    }

    let Some(raw) = lookup(key) else {
        bail!("No characteristic coefficients have been computed for {key}");
    };

    if raw.len() != A::LEN {
        bail!(
            "Characteristic table entry for {key} has {} words, expected {}",
            raw.len(),
            A::LEN
        );
    }

    debug!("Loaded characteristic coefficients for {key}");

    let mut words = A::zeroed();
    for (dst, &src) in words.as_mut_slice().iter_mut().zip(raw) {
        *dst = A::Word::from_u64(src);
    }
    Ok(words)
}

/// Packing of polynomial coefficients into GF(2) squares by interleaving bits with zeros.
pub mod riffle;
/// Unsigned machine words and fixed-size arrays of them, viewed as bit-vectors.
pub mod word;

pub use riffle::*;
pub use word::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::riffle::*;
    pub use crate::word::*;
}

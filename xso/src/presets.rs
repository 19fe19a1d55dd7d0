use super::{Generator, Plus, PlusPlus, Star, StarStar, Xoroshiro, Xoshiro};

// Preferred xoshiro states
/// Four 32-bit words, as in xoshiro128.
pub type Xoshiro4x32 = Xoshiro<u32, 4, 9, 11>;
/// Four 64-bit words, as in xoshiro256.
pub type Xoshiro4x64 = Xoshiro<u64, 4, 17, 45>;
/// Eight 64-bit words, as in xoshiro512.
pub type Xoshiro8x64 = Xoshiro<u64, 8, 11, 21>;

// Preferred xoroshiro states
/// Two 32-bit words, as in xoroshiro64.
pub type Xoroshiro2x32 = Xoroshiro<u32, 2, 26, 9, 13>;
/// Two 64-bit words, as in xoroshiro128.
pub type Xoroshiro2x64 = Xoroshiro<u64, 2, 24, 16, 37>;
/// Alternative parameters for two 64-bit words, used with the `++` scrambler.
pub type Xoroshiro2x64b = Xoroshiro<u64, 2, 49, 21, 28>;
/// Sixteen 64-bit words, as in xoroshiro1024.
pub type Xoroshiro16x64 = Xoroshiro<u64, 16, 25, 27, 36>;

// The 17 generators analyzed by Blackman & Vigna in "Scrambled Linear Pseudorandom Number Generators"
/// xoshiro128+
pub type Xoshiro4x32Plus = Generator<Xoshiro4x32, Plus<0, 3>>;
/// xoshiro128++
pub type Xoshiro4x32PlusPlus = Generator<Xoshiro4x32, PlusPlus<7, 0, 3>>;
/// xoshiro128**
pub type Xoshiro4x32StarStar = Generator<Xoshiro4x32, StarStar<5, 7, 9, 1>>;
/// xoshiro256+
pub type Xoshiro4x64Plus = Generator<Xoshiro4x64, Plus<0, 3>>;
/// xoshiro256++
pub type Xoshiro4x64PlusPlus = Generator<Xoshiro4x64, PlusPlus<23, 0, 3>>;
/// xoshiro256**
pub type Xoshiro4x64StarStar = Generator<Xoshiro4x64, StarStar<5, 7, 9, 1>>;
/// xoshiro512+
pub type Xoshiro8x64Plus = Generator<Xoshiro8x64, Plus<2, 0>>;
/// xoshiro512++
pub type Xoshiro8x64PlusPlus = Generator<Xoshiro8x64, PlusPlus<17, 2, 0>>;
/// xoshiro512**
pub type Xoshiro8x64StarStar = Generator<Xoshiro8x64, StarStar<5, 7, 9, 1>>;

/// xoroshiro64*
pub type Xoroshiro2x32Star = Generator<Xoroshiro2x32, Star<0x9e3779bb, 0>>;
/// xoroshiro64**
pub type Xoroshiro2x32StarStar = Generator<Xoroshiro2x32, StarStar<0x9e3779bb, 5, 5, 0>>;
/// xoroshiro128+
pub type Xoroshiro2x64Plus = Generator<Xoroshiro2x64, Plus<0, 1>>;
/// xoroshiro128++
pub type Xoroshiro2x64PlusPlus = Generator<Xoroshiro2x64b, PlusPlus<17, 0, 1>>;
/// xoroshiro128**
pub type Xoroshiro2x64StarStar = Generator<Xoroshiro2x64, StarStar<5, 7, 9, 0>>;
/// xoroshiro1024++
pub type Xoroshiro16x64PlusPlus = Generator<Xoroshiro16x64, PlusPlus<23, 15, 0>>;
/// xoroshiro1024*
pub type Xoroshiro16x64Star = Generator<Xoroshiro16x64, Star<0x9e3779b97f4a7c13, 0>>;
/// xoroshiro1024**
pub type Xoroshiro16x64StarStar = Generator<Xoroshiro16x64, StarStar<5, 7, 9, 0>>;

/// The default generator with 32-bit output.
pub type Rng32 = Xoshiro4x32StarStar;

/// The default generator with 64-bit output.
pub type Rng64 = Xoshiro4x64StarStar;

/// The default generator.
pub type Rng = Rng64;

use xso::prelude::*;
use xso::{fill_from_word, reduce};

fn seeded<S: State + Default>(seed: u64) -> S {
    let mut words = S::Words::zeroed();
    fill_from_word(seed, words.as_mut_slice());

    let mut state = S::default();
    state.seed(words.as_slice());
    state
}

fn test_jump_matches_steps<S: State + Default>(j: usize, pow2: bool) {
    let mut jumped: S = seeded(j as u64);
    let mut stepped = jumped.clone();

    let coeffs = jump_coefficients::<S>(j, pow2).unwrap();
    jump(&mut jumped, &coeffs);

    let steps = if pow2 { 1 << j } else { j };
    for _ in 0..steps {
        stepped.step();
    }

    assert_eq!(
        jumped.words(),
        stepped.words(),
        "\n{} jump by {}{j} failed",
        S::name(),
        if pow2 { "2^" } else { "" }
    );
}

fn test_all_jumps<S: State + Default>() {
    let n = S::BITS;
    for j in [0, 1, n - 1, n, n + 1, 3 * n + 7, 1000, 5000] {
        test_jump_matches_steps::<S>(j, false);
    }
    for j in 0..=12 {
        test_jump_matches_steps::<S>(j, true);
    }
}

fn test_additivity<S: State + Default>(j1: usize, j2: usize) {
    let mut twice: S = seeded(j1 as u64 ^ j2 as u64);
    let mut once = twice.clone();

    jump(&mut twice, &jump_coefficients::<S>(j1, false).unwrap());
    jump(&mut twice, &jump_coefficients::<S>(j2, false).unwrap());
    jump(&mut once, &jump_coefficients::<S>(j1 + j2, false).unwrap());

    assert_eq!(twice.words(), once.words(), "{}", S::name());
}

#[cfg(test)]
mod jumps_match_steps {
    use super::*;

    #[test]
    fn xoshiro_4x32() {
        test_all_jumps::<Xoshiro4x32>();
    }

    #[test]
    fn xoshiro_4x64() {
        test_all_jumps::<Xoshiro4x64>();
    }

    #[test]
    fn xoshiro_8x64() {
        test_all_jumps::<Xoshiro8x64>();
    }

    #[test]
    fn xoroshiro_2x32() {
        test_all_jumps::<Xoroshiro2x32>();
    }

    #[test]
    fn xoroshiro_2x64() {
        test_all_jumps::<Xoroshiro2x64>();
    }

    #[test]
    fn xoroshiro_2x64b() {
        test_all_jumps::<Xoroshiro2x64b>();
    }

    #[test]
    fn xoroshiro_16x64() {
        test_all_jumps::<Xoroshiro16x64>();
    }

    #[test]
    fn generators_jump_like_their_states() {
        test_all_jumps::<Rng64>();
        test_all_jumps::<Xoroshiro16x64StarStar>();
    }
}

#[cfg(test)]
mod additivity {
    use super::*;

    #[test]
    fn xoshiro_additivity() {
        test_additivity::<Xoshiro4x32>(1 << 40, 12345);
        test_additivity::<Xoshiro4x64>(999_999_999_999, 1 << 50);
        test_additivity::<Xoshiro8x64>(77, usize::MAX / 2);
    }

    #[test]
    fn xoroshiro_additivity() {
        test_additivity::<Xoroshiro2x32>(1 << 33, 1 << 33);
        test_additivity::<Xoroshiro2x64>(3, 1 << 62);
        test_additivity::<Xoroshiro16x64>(123_456_789, 987_654_321_000);
    }

    #[test]
    fn generator_jump_by_pow2_twice() {
        let mut a = Rng64::from_seed_word(5);
        let mut b = a;
        a.jump_by_pow2(100).unwrap();
        a.jump_by_pow2(100).unwrap();
        b.jump_by_pow2(101).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod known_constants {
    use super::*;

    #[test]
    fn reduction_boundaries() {
        let p = Xoroshiro16x64::characteristic_coefficients().unwrap();
        assert_eq!(reduce(&p, 0, false), <[u64; 16]>::unit(0));
        assert_eq!(reduce(&p, 1024, false), p);
        assert_eq!(reduce(&p, 0, true), <[u64; 16]>::unit(1));
    }

    #[test]
    fn xoshiro256_jump_and_long_jump() {
        assert_eq!(
            jump_coefficients::<Xoshiro4x64>(128, true).unwrap(),
            [
                0x180ec6d33cfd0aba,
                0xd5a61266f0c9392c,
                0xa9582618e03fc9aa,
                0x39abdc4529b1661c,
            ]
        );
        assert_eq!(
            jump_coefficients::<Xoshiro4x64>(192, true).unwrap(),
            [
                0x76e15d3efefdcbbf,
                0xc5004e441c522fb3,
                0x77710069854ee241,
                0x39109bb02acbe635,
            ]
        );
    }

    #[test]
    fn xoshiro128_jump() {
        assert_eq!(
            jump_coefficients::<Xoshiro4x32>(64, true).unwrap(),
            [0x8764000b, 0xf542d2d3, 0x6fa035c3, 0x77f2db5b]
        );
    }

    #[test]
    fn xoroshiro128_jump() {
        assert_eq!(
            jump_coefficients::<Xoroshiro2x64>(64, true).unwrap(),
            [0xdf900294d8f554a5, 0x170865df4b3201fc]
        );
    }

    #[test]
    fn xoroshiro1024_jump() {
        assert_eq!(
            jump_coefficients::<Xoroshiro16x64>(512, true).unwrap(),
            [
                0x931197d8e3177f17,
                0xb59422e0b9138c5f,
                0xf06a6afb49d668bb,
                0xacb8a6412c8a1401,
                0x12304ec85f0b3468,
                0xb7dfe7079209891e,
                0x405b7eec77d9eb14,
                0x34ead68280c44e4a,
                0xe0e4ba3e0ac9e366,
                0x8f46eda8348905b7,
                0x328bf4dbad90d6ff,
                0xc8fd6fb31c9effc3,
                0xe899d452d4b67652,
                0x45f387286ade3205,
                0x03864f454a8920bd,
                0xa68fa28725b1b384,
            ]
        );
    }

    #[test]
    fn missing_polynomial_is_an_error() {
        type Unlisted = Generator<Xoroshiro<u64, 2, 55, 14, 36>, Plus<0, 1>>;
        let mut rng = Unlisted::from_seed_word(1);
        let before = rng.words();

        assert!(Unlisted::jump_coefficients(10, false).is_err());
        assert!(rng.jump_by(10).is_err());
        assert!(rng.jump_by_pow2(10).is_err());
        assert!(Partition::new(&rng, 4).is_err());

        // Failed jumps leave the state alone
        assert_eq!(rng.words(), before);
    }
}

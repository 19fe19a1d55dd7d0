use xso::prelude::*;

fn first_outputs<S: State + Default, X: Scrambler>(seed: &[S::Word], count: usize) -> Vec<S::Word> {
    let mut rng = Generator::<S, X>::from_words(seed);
    (0..count).map(|_| rng.next_word()).collect()
}

#[test]
fn xoshiro_4x64_star_star_from_unit_state() {
    let outputs = first_outputs::<Xoshiro4x64, StarStar<5, 7, 9, 1>>(&[1, 0, 0, 0], 10);
    assert_eq!(
        outputs,
        [
            0x0,
            0x1680,
            0x1680,
            0x2d001680,
            0x2d000002d000000,
            0x5a5a2d001680,
            0x2d05a002d0b4000,
            0x1c005a002d000000,
            0xb6d02d5a384b5680,
            0xb4b45a5a05a2e7e8,
        ]
    );
}

#[test]
fn xoshiro_8x64_plus() {
    let seed: Vec<u64> = (1..=8).collect();
    let outputs = first_outputs::<Xoshiro8x64, Plus<2, 0>>(&seed, 5);
    assert_eq!(outputs, [0x4, 0x8, 0x1011, 0x1801010, 0x300001a0401b]);
}

#[test]
fn xoroshiro_2x64_plus() {
    let outputs = first_outputs::<Xoroshiro2x64, Plus<0, 1>>(&[1, 2], 5);
    assert_eq!(
        outputs,
        [
            0x3,
            0x6001030003,
            0x20c102c302000c03,
            0x810180670d23ad61,
            0x26d13a4941333a42,
        ]
    );
}

#[test]
fn xoroshiro_2x32_star() {
    let outputs = first_outputs::<Xoroshiro2x32, Star<0x9e3779bb, 0>>(&[1, 2], 5);
    assert_eq!(
        outputs,
        [0x9e3779bb, 0x1380cf31, 0xf233f6b9, 0xfde6b3b9, 0xf9c9e6c]
    );
}

#[test]
fn xoroshiro_16x64_plus_plus() {
    let seed: Vec<u64> = (1..=16).collect();
    let outputs = first_outputs::<Xoroshiro16x64, PlusPlus<23, 15, 0>>(&seed, 5);
    assert_eq!(
        outputs,
        [
            0x8800010,
            0x8800011001000000,
            0x1000002881801100,
            0x1801103102000288,
            0x200028c182910310,
        ]
    );
}

#[test]
fn equal_seeds_give_equal_streams() {
    let mut a = Xoroshiro16x64Star::from_seed_word(2024);
    let mut b = Xoroshiro16x64Star::from_seed_word(2024);
    let mut c = a;
    for _ in 0..1000 {
        let x = a.next_word();
        assert_eq!(x, b.next_word());
        assert_eq!(x, c.next_word());
    }
}

#[test]
fn zero_state_is_absorbing() {
    let mut a = Xoshiro8x64StarStar::from_words(&[0; 8]);
    let mut b = Xoroshiro16x64PlusPlus::from_words(&[0; 16]);
    let mut c = Xoroshiro2x32StarStar::from_words(&[0; 2]);
    for _ in 0..100 {
        assert_eq!(a.next_word(), 0);
        assert_eq!(b.next_word(), 0);
        assert_eq!(c.next_word(), 0);
    }
}

#[test]
fn ring_buffer_words_round_trip() {
    let mut rng = Xoroshiro16x64StarStar::from_seed_word(17);
    rng.discard(21);

    let mut copy = Xoroshiro16x64StarStar::from_words(&rng.words());
    for _ in 0..100 {
        assert_eq!(copy.next_word(), rng.next_word());
    }
}

#[test]
fn generator_names() {
    assert_eq!(Xoshiro4x32Plus::name(), "xoshiro<4x32,9,11>plus<0,3>");
    assert_eq!(Xoshiro4x32PlusPlus::name(), "xoshiro<4x32,9,11>plus_plus<7,0,3>");
    assert_eq!(Xoshiro8x64StarStar::name(), "xoshiro<8x64,11,21>star_star<5,7,9,1>");
    assert_eq!(Xoroshiro2x32Star::name(), "xoroshiro<2x32,26,9,13>star<9e3779bb,0>");
    assert_eq!(
        Xoroshiro2x32StarStar::name(),
        "xoroshiro<2x32,26,9,13>star_star<9e3779bb,5,5,0>"
    );
    assert_eq!(
        Xoroshiro2x64PlusPlus::name(),
        "xoroshiro<2x64,49,21,28>plus_plus<17,0,1>"
    );
    assert_eq!(
        Xoroshiro16x64Star::name(),
        "xoroshiro<16x64,25,27,36>star<9e3779b97f4a7c13,0>"
    );
    assert_eq!(Rng::from_seed_word(0).to_string(), Rng64::name());
}

#[test]
fn every_preset_generates() {
    fn check<S: State + Default, X: Scrambler>() {
        let mut a = Generator::<S, X>::new();
        let mut b = Generator::<S, X>::from_seed_word(1);
        assert!((0..16).any(|_| a.next_word() != b.next_word()), "{}", Generator::<S, X>::name());
    }

    check::<Xoshiro4x32, Plus<0, 3>>();
    check::<Xoshiro4x32, PlusPlus<7, 0, 3>>();
    check::<Xoshiro4x32, StarStar<5, 7, 9, 1>>();
    check::<Xoshiro4x64, Plus<0, 3>>();
    check::<Xoshiro4x64, PlusPlus<23, 0, 3>>();
    check::<Xoshiro4x64, StarStar<5, 7, 9, 1>>();
    check::<Xoshiro8x64, Plus<2, 0>>();
    check::<Xoshiro8x64, PlusPlus<17, 2, 0>>();
    check::<Xoshiro8x64, StarStar<5, 7, 9, 1>>();
    check::<Xoroshiro2x32, Star<0x9e3779bb, 0>>();
    check::<Xoroshiro2x32, StarStar<0x9e3779bb, 5, 5, 0>>();
    check::<Xoroshiro2x64, Plus<0, 1>>();
    check::<Xoroshiro2x64b, PlusPlus<17, 0, 1>>();
    check::<Xoroshiro2x64, StarStar<5, 7, 9, 0>>();
    check::<Xoroshiro16x64, PlusPlus<23, 15, 0>>();
    check::<Xoroshiro16x64, Star<0x9e3779b97f4a7c13, 0>>();
    check::<Xoroshiro16x64, StarStar<5, 7, 9, 0>>();
}

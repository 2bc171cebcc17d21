#![cfg(feature = "rayon")]

use pixmatch::{
    exact_match, exact_match_par, score, score_par, ChannelMode, DiffMode, RasterView,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALL_MODES: [(ChannelMode, DiffMode); 4] = [
    (ChannelMode::PerChannel, DiffMode::Distance),
    (ChannelMode::PerChannel, DiffMode::CountMismatch),
    (ChannelMode::Packed, DiffMode::Distance),
    (ChannelMode::Packed, DiffMode::CountMismatch),
];

fn random_raster(rng: &mut StdRng, pixels: usize) -> Vec<u32> {
    (0..pixels).map(|_| rng.random_range(0..=u32::MAX)).collect()
}

#[test]
fn parallel_score_matches_sequential() {
    let width = 64;
    let height = 48;
    let mut rng = StdRng::seed_from_u64(42);
    let left = random_raster(&mut rng, width * height);
    let right = random_raster(&mut rng, width * height);
    let a = RasterView::from_slice(&left, width, height).unwrap();
    let b = RasterView::from_slice(&right, width, height).unwrap();

    // Accumulation is integral, so parallel and sequential results are
    // bit-identical, not merely close.
    for (channel_mode, diff_mode) in ALL_MODES {
        assert_eq!(
            score_par(&a, &b, channel_mode, diff_mode),
            score(&a, &b, channel_mode, diff_mode),
            "{channel_mode:?}/{diff_mode:?}"
        );
    }
}

#[test]
fn parallel_exact_match_matches_sequential() {
    let width = 64;
    let height = 48;
    let mut rng = StdRng::seed_from_u64(43);
    let base = random_raster(&mut rng, width * height);
    let mut perturbed = base.clone();
    perturbed[width * height / 2] ^= 0x0000_0001;

    let a = RasterView::from_slice(&base, width, height).unwrap();
    let b = RasterView::from_slice(&perturbed, width, height).unwrap();

    assert!(exact_match_par(&a, &a));
    assert_eq!(exact_match_par(&a, &a), exact_match(&a, &a));
    assert_eq!(exact_match_par(&a, &b), exact_match(&a, &b));
    assert!(!exact_match_par(&a, &b));
}

#[test]
fn parallel_handles_degenerate_inputs() {
    let empty = RasterView::from_slice(&[], 0, 0).unwrap();
    assert!(exact_match_par(&empty, &empty));
    for (channel_mode, diff_mode) in ALL_MODES {
        assert_eq!(score_par(&empty, &empty, channel_mode, diff_mode), 1.0);
    }

    let data = [0u32; 4];
    let square = RasterView::from_slice(&data, 2, 2).unwrap();
    assert!(!exact_match_par(&square, &empty));
    for (channel_mode, diff_mode) in ALL_MODES {
        assert_eq!(score_par(&square, &empty, channel_mode, diff_mode), 0.0);
    }
}

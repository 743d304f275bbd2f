//! Randomized near-tie breaking.
//!
//! When several alternatives score within a small band of the best one,
//! always picking the numerically highest would starve the others over
//! repeated scheduling decisions. The alternatives inside the band are
//! shuffled; everything outside it keeps its rank.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::RankedList;

/// Near-tie threshold as a fraction of the best score.
///
/// Returns `0.0` for an empty list.
pub fn near_tie_threshold(ranked: &RankedList, ratio: f64) -> f64 {
    ranked.best().map_or(0.0, |best| best.score * ratio)
}

/// Ranked positions forming the nearby group.
///
/// Position 0 (the best) is always included, followed by every position
/// whose score differs from the best by strictly less than `threshold`.
pub fn nearby_positions(ranked: &RankedList, threshold: f64) -> Vec<usize> {
    let Some(best) = ranked.best() else {
        return Vec::new();
    };

    std::iter::once(0)
        .chain(
            ranked
                .iter()
                .enumerate()
                .skip(1)
                .filter(|(_, alt)| (best.score - alt.score).abs() < threshold)
                .map(|(k, _)| k),
        )
        .collect()
}

/// Shuffles the nearby group in place of its original positions.
///
/// The output has the same length and the same set of alternatives as the
/// input. Positions outside the nearby group are untouched, and a group of
/// one member returns the input unchanged without consulting `rng`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_topsis::ranking::{rank_alternatives, randomize_near_ties};
///
/// let ranked = rank_alternatives(&[0.90, 0.88, 0.40]);
/// let mut rng = StdRng::seed_from_u64(7);
/// let shuffled = randomize_near_ties(&ranked, 0.09, &mut rng);
///
/// // 0.40 is far outside the band and stays last.
/// assert_eq!(shuffled[2].index, 3);
/// ```
pub fn randomize_near_ties<R: Rng + ?Sized>(
    ranked: &RankedList,
    threshold: f64,
    rng: &mut R,
) -> RankedList {
    let positions = nearby_positions(ranked, threshold);
    if positions.len() <= 1 {
        return ranked.clone();
    }

    let mut nearby: Vec<_> = positions.iter().map(|&p| ranked[p]).collect();
    nearby.shuffle(rng);

    let mut reorganized = ranked.clone().into_vec();
    for (&position, alternative) in positions.iter().zip(nearby) {
        reorganized[position] = alternative;
    }

    RankedList::from_vec(reorganized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::rank_alternatives;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Fails the test if the shuffle draws any randomness.
    struct PanickingRng;

    impl RngCore for PanickingRng {
        fn next_u32(&mut self) -> u32 {
            panic!("rng must not be used")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("rng must not be used")
        }
        fn fill_bytes(&mut self, _dst: &mut [u8]) {
            panic!("rng must not be used")
        }
    }

    fn sorted_indices(list: &RankedList) -> Vec<usize> {
        let mut v = list.indices();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_threshold_is_ten_percent_of_best() {
        let ranked = rank_alternatives(&[0.3, 0.8]);
        assert!((near_tie_threshold(&ranked, 0.1) - 0.08).abs() < 1e-12);
        assert_eq!(near_tie_threshold(&RankedList::default(), 0.1), 0.0);
    }

    #[test]
    fn test_nearby_positions_strict() {
        // best 1.0, threshold 0.1: 0.95 is in, 0.9 sits exactly on the edge and is out.
        let ranked = rank_alternatives(&[1.0, 0.95, 0.9, 0.2]);
        assert_eq!(nearby_positions(&ranked, 0.1), vec![0, 1]);
    }

    #[test]
    fn test_single_member_group_is_unchanged() {
        let ranked = rank_alternatives(&[0.9, 0.5, 0.1]);
        let out = randomize_near_ties(&ranked, 0.09, &mut PanickingRng);
        assert_eq!(out, ranked);
    }

    #[test]
    fn test_zero_threshold_is_unchanged() {
        let ranked = rank_alternatives(&[0.5, 0.5, 0.5]);
        let out = randomize_near_ties(&ranked, 0.0, &mut PanickingRng);
        assert_eq!(out, ranked);
    }

    #[test]
    fn test_outside_band_untouched() {
        let ranked = rank_alternatives(&[0.90, 0.89, 0.88, 0.30, 0.10]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = randomize_near_ties(&ranked, 0.09, &mut rng);
            assert_eq!(out[3], ranked[3]);
            assert_eq!(out[4], ranked[4]);

            let mut head: Vec<usize> = out.as_slice()[..3].iter().map(|a| a.index).collect();
            head.sort_unstable();
            assert_eq!(head, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_exact_ties_are_all_reachable_at_top() {
        let ranked = rank_alternatives(&[0.5; 4]);
        let mut seen_top = std::collections::HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = randomize_near_ties(&ranked, 0.05, &mut rng);
            seen_top.insert(out[0].index);
        }
        assert_eq!(seen_top.len(), 4);
    }

    #[test]
    fn test_same_seed_same_result() {
        let ranked = rank_alternatives(&[0.5; 6]);
        let a = randomize_near_ties(&ranked, 0.05, &mut StdRng::seed_from_u64(11));
        let b = randomize_near_ties(&ranked, 0.05, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_preserves_multiset(
            scores in prop::collection::vec(0.0f64..1.0, 1..30),
            threshold in 0.0f64..1.0,
            seed in any::<u64>(),
        ) {
            let ranked = rank_alternatives(&scores);
            let out = randomize_near_ties(&ranked, threshold, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(out.len(), ranked.len());
            prop_assert_eq!(sorted_indices(&out), sorted_indices(&ranked));
        }

        #[test]
        fn prop_single_member_group_is_identity(
            scores in prop::collection::vec(0.0f64..1.0, 1..30),
            seed in any::<u64>(),
        ) {
            let ranked = rank_alternatives(&scores);
            let best = ranked.best().map(|a| a.score).unwrap_or(0.0);
            let second = ranked.as_slice().get(1).map(|a| a.score).unwrap_or(0.0);
            // Any threshold at or below the gap to the runner-up isolates the best.
            let threshold = (best - second).abs();
            prop_assume!(nearby_positions(&ranked, threshold).len() == 1);

            let out = randomize_near_ties(&ranked, threshold, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(out, ranked);
        }
    }
}

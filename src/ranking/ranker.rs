//! Descending sort by preference score.

use super::types::{Alternative, RankedList};

/// Attaches 1-based row indices to `scores` and sorts best first.
///
/// The sort is stable: equal scores keep their input order. Resolving
/// those ties is left to [`randomize_near_ties`](super::randomize_near_ties).
///
/// # Examples
///
/// ```
/// use u_topsis::ranking::rank_alternatives;
///
/// let ranked = rank_alternatives(&[0.2, 0.9, 0.5]);
/// assert_eq!(ranked.indices(), vec![2, 3, 1]);
/// ```
pub fn rank_alternatives(scores: &[f64]) -> RankedList {
    let mut alternatives: Vec<Alternative> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| Alternative {
            index: i + 1,
            score,
        })
        .collect();

    alternatives.sort_by(|a, b| b.score.total_cmp(&a.score));

    RankedList::from_vec(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_descending_order() {
        let ranked = rank_alternatives(&[0.1, 0.7, 0.4, 0.9]);
        assert_eq!(ranked.indices(), vec![4, 2, 3, 1]);
        assert!((ranked.best().unwrap().score - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_alternatives(&[0.5, 0.8, 0.5, 0.5]);
        assert_eq!(ranked.indices(), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_single_alternative() {
        let ranked = rank_alternatives(&[0.0]);
        assert_eq!(ranked.indices(), vec![1]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_alternatives(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_ranking_is_permutation(scores in prop::collection::vec(0.0f64..1.0, 1..50)) {
            let ranked = rank_alternatives(&scores);
            let mut indices = ranked.indices();
            indices.sort_unstable();
            prop_assert_eq!(indices, (1..=scores.len()).collect::<Vec<_>>());

            for pair in ranked.as_slice().windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}

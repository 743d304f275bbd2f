//! Pipeline execution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::RankingConfig;
use crate::criteria::CriterionSpec;
use crate::error::{Degeneracy, RankError, Result};
use crate::ranking::{
    near_tie_threshold, nearby_positions, randomize_near_ties, rank_alternatives, RankedList,
};
use crate::topsis::{apply_weights, normalize, preference_scores, DecisionMatrix, IdealVectors};

/// Result of a ranking run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingResult {
    /// Final order after near-tie randomization. Hand this to the scheduler.
    pub ranked: RankedList,

    /// Order by score alone, before randomization.
    pub scored: RankedList,

    /// Reference points used for scoring.
    pub solutions: IdealVectors,

    /// Absolute near-tie threshold used for this run.
    pub threshold: f64,

    /// Size of the shuffled group (1 = nothing was shuffled).
    pub nearby: usize,

    /// Numeric degeneracies absorbed during the run.
    pub degeneracies: Vec<Degeneracy>,
}

impl RankingResult {
    /// 1-based index of the selected target.
    pub fn best_index(&self) -> Option<usize> {
        self.ranked.best().map(|a| a.index)
    }

    /// `true` when every alternative received the neutral score.
    pub fn is_degenerate(&self) -> bool {
        self.degeneracies
            .contains(&Degeneracy::DegenerateSolutionSpace)
    }
}

/// Ranks decision matrices against a fixed criterion table.
///
/// A ranker holds only immutable configuration; independent runs share
/// nothing and may execute concurrently.
///
/// # Examples
///
/// ```
/// use u_topsis::criteria::{Criterion, CriterionSpec};
/// use u_topsis::pipeline::{RankingConfig, TopsisRanker};
/// use u_topsis::topsis::DecisionMatrix;
///
/// let spec = CriterionSpec::new(vec![
///     Criterion::cost("latency", 1.0),
///     Criterion::benefit("nodes", 1.0),
///     Criterion::benefit("cpu_free", 1.0),
/// ])
/// .unwrap();
/// let ranker = TopsisRanker::new(spec, RankingConfig::default().with_seed(1)).unwrap();
///
/// let matrix = DecisionMatrix::new(vec![
///     vec![1.0, 100.0, 0.0],
///     vec![2.0, 50.0, 0.0],
///     vec![3.0, 10.0, 0.0],
/// ])
/// .unwrap();
///
/// let result = ranker.rank(&matrix).unwrap();
/// assert_eq!(result.best_index(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct TopsisRanker {
    spec: CriterionSpec,
    config: RankingConfig,
}

impl TopsisRanker {
    /// Creates a ranker, validating the configuration.
    pub fn new(spec: CriterionSpec, config: RankingConfig) -> Result<Self> {
        config.validate().map_err(RankError::InvalidConfig)?;
        Ok(Self { spec, config })
    }

    pub fn spec(&self) -> &CriterionSpec {
        &self.spec
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Ranks raw feature rows.
    pub fn rank_rows(&self, rows: Vec<Vec<f64>>) -> Result<RankingResult> {
        self.rank(&DecisionMatrix::new(rows)?)
    }

    /// Ranks a matrix using the configured seed, or system entropy when
    /// no seed is set.
    pub fn rank(&self, matrix: &DecisionMatrix) -> Result<RankingResult> {
        let mut rng = make_rng(self.config.seed);
        self.rank_with_rng(matrix, &mut rng)
    }

    /// Ranks a matrix drawing the near-tie shuffle from `rng`.
    pub fn rank_with_rng<R: Rng + ?Sized>(
        &self,
        matrix: &DecisionMatrix,
        rng: &mut R,
    ) -> Result<RankingResult> {
        if matrix.n_criteria() != self.spec.len() {
            return Err(RankError::CriterionCountMismatch {
                expected: self.spec.len(),
                actual: matrix.n_criteria(),
            });
        }

        let mut degeneracies = Vec::new();

        let normalized = normalize(matrix);
        for &column in &normalized.degenerate_columns {
            tracing::warn!(
                criterion = %self.spec.criteria()[column].name,
                column,
                "criterion column has zero norm; treating it as all zeros"
            );
            degeneracies.push(Degeneracy::DegenerateColumn { column });
        }

        let weighted = apply_weights(&normalized.matrix, &self.spec.weights())?;
        let solutions = IdealVectors::solve(&weighted, &self.spec.directions())?;

        let scores = if solutions.is_degenerate() {
            tracing::warn!(
                alternatives = matrix.n_alternatives(),
                neutral_score = self.config.neutral_score,
                "ideal and anti-ideal coincide; all alternatives are tied"
            );
            degeneracies.push(Degeneracy::DegenerateSolutionSpace);
            vec![self.config.neutral_score; matrix.n_alternatives()]
        } else {
            preference_scores(&weighted, &solutions, self.config.neutral_score)
        };

        let scored = rank_alternatives(&scores);
        let mut threshold = near_tie_threshold(&scored, self.config.near_tie_ratio);
        if solutions.is_degenerate() {
            // Every score is identical, so any positive band holds all of them.
            threshold = threshold.max(f64::MIN_POSITIVE);
        }
        let nearby = nearby_positions(&scored, threshold).len();
        let ranked = randomize_near_ties(&scored, threshold, rng);

        tracing::debug!(
            alternatives = matrix.n_alternatives(),
            criteria = matrix.n_criteria(),
            threshold,
            nearby,
            best = ?ranked.best().map(|a| a.index),
            "ranked alternatives"
        );

        Ok(RankingResult {
            ranked,
            scored,
            solutions,
            threshold,
            nearby,
            degeneracies,
        })
    }

    /// Ranks independent matrices, in parallel with the `parallel` feature.
    ///
    /// Matrix `i` is shuffled with seed `seed + i` when a seed is configured,
    /// so the output does not depend on the execution order.
    pub fn rank_batch(&self, matrices: &[DecisionMatrix]) -> Vec<Result<RankingResult>> {
        let run = |(i, matrix): (usize, &DecisionMatrix)| {
            let mut rng = make_rng(self.config.seed.map(|s| s.wrapping_add(i as u64)));
            self.rank_with_rng(matrix, &mut rng)
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            matrices.par_iter().enumerate().map(run).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            matrices.iter().enumerate().map(run).collect()
        }
    }
}

/// Seeded generator, or one seeded from system entropy.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{Criterion, Direction};

    fn three_criteria() -> CriterionSpec {
        CriterionSpec::new(vec![
            Criterion::cost("latency", 1.0),
            Criterion::benefit("nodes", 1.0),
            Criterion::benefit("cpu_free", 1.0),
        ])
        .unwrap()
    }

    fn seeded(spec: CriterionSpec, seed: u64) -> TopsisRanker {
        TopsisRanker::new(spec, RankingConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn test_lowest_cost_highest_benefit_wins() {
        let ranker = seeded(three_criteria(), 3);
        let result = ranker
            .rank_rows(vec![
                vec![1.0, 100.0, 0.0],
                vec![2.0, 50.0, 0.0],
                vec![3.0, 10.0, 0.0],
            ])
            .unwrap();

        assert_eq!(result.scored.indices(), vec![1, 2, 3]);
        assert_eq!(result.best_index(), Some(1));
        assert!((result.scored[0].score - 1.0).abs() < 1e-12);
        assert_eq!(
            result.degeneracies,
            vec![Degeneracy::DegenerateColumn { column: 2 }]
        );
    }

    #[test]
    fn test_wrong_direction_inverts_ranking() {
        let spec = CriterionSpec::new(vec![
            Criterion::benefit("latency", 1.0),
            Criterion::benefit("nodes", 1.0),
            Criterion::benefit("cpu_free", 1.0),
        ])
        .unwrap();
        let ranker = seeded(spec, 3);
        let rows = vec![vec![1.0, 10.0, 5.0], vec![10.0, 9.0, 5.0]];
        let result = ranker.rank_rows(rows).unwrap();

        // Treating latency as a benefit makes the slow target win.
        assert_eq!(result.scored.indices(), vec![2, 1]);
    }

    #[test]
    fn test_sentinel_row_ranks_last() {
        let spec = CriterionSpec::new(vec![
            Criterion::cost("latency", 1.0),
            Criterion::benefit("cpu_free", 5.0),
            Criterion::cost("pending", 2.0),
        ])
        .unwrap();
        let sentinel = spec.sentinel_row();
        let ranker = seeded(spec, 5);

        let rows = vec![
            vec![0.8, 200.0, 40.1],
            sentinel.clone(),
            vec![0.1, 3000.0, 0.1],
            vec![2.5, 50.0, 900.1],
        ];
        for seed in 0..10 {
            let result = ranker
                .rank_with_rng(
                    &DecisionMatrix::new(rows.clone()).unwrap(),
                    &mut StdRng::seed_from_u64(seed),
                )
                .unwrap();
            assert_eq!(result.ranked.as_slice().last().map(|a| a.index), Some(2));
        }
    }

    #[test]
    fn test_identical_rows_are_degenerate_and_shuffled() {
        let ranker = seeded(three_criteria(), 0);
        let matrix = DecisionMatrix::new(vec![vec![1.0, 4.0, 2.0]; 4]).unwrap();

        let mut tops = std::collections::HashSet::new();
        for seed in 0..100 {
            let result = ranker
                .rank_with_rng(&matrix, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert!(result.is_degenerate());
            assert!(result.scored.iter().all(|a| (a.score - 0.5).abs() < 1e-12));
            assert_eq!(result.nearby, 4);
            tops.insert(result.best_index().unwrap());
        }
        // Insertion order does not decide the winner.
        assert!(tops.len() > 1);
    }

    #[test]
    fn test_identical_rows_shuffled_with_zero_neutral_score() {
        let config = RankingConfig::default().with_neutral_score(0.0);
        let ranker = TopsisRanker::new(three_criteria(), config).unwrap();
        let matrix = DecisionMatrix::new(vec![vec![1.0, 4.0, 2.0]; 4]).unwrap();

        let mut tops = std::collections::HashSet::new();
        for seed in 0..50 {
            let result = ranker
                .rank_with_rng(&matrix, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert!(result.is_degenerate());
            assert_eq!(result.nearby, 4);
            tops.insert(result.best_index().unwrap());
        }
        assert!(tops.len() > 1);
    }

    #[test]
    fn test_identical_rows_shuffled_with_zero_ratio() {
        let config = RankingConfig::default().with_near_tie_ratio(0.0);
        let ranker = TopsisRanker::new(three_criteria(), config).unwrap();
        let matrix = DecisionMatrix::new(vec![vec![1.0, 4.0, 2.0]; 3]).unwrap();

        let mut tops = std::collections::HashSet::new();
        for seed in 0..50 {
            let result = ranker
                .rank_with_rng(&matrix, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(result.nearby, 3);
            tops.insert(result.best_index().unwrap());
        }
        assert!(tops.len() > 1);
    }

    #[test]
    fn test_huge_benefit_values_still_discriminate() {
        let spec = CriterionSpec::new(vec![
            Criterion::cost("latency", 1.0),
            Criterion::benefit("memory_free", 1.0),
        ])
        .unwrap();
        let ranker = seeded(spec, 3);
        let result = ranker
            .rank_rows(vec![vec![1.0, 1e200], vec![1.0, 2e200]])
            .unwrap();

        assert!(!result.is_degenerate());
        assert_eq!(result.scored.indices(), vec![2, 1]);
        assert!((result.scored[0].score - 1.0).abs() < 1e-12);
        assert!(result.scored[1].score.abs() < 1e-12);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let ranker = seeded(three_criteria(), 42);
        let matrix = DecisionMatrix::new(vec![
            vec![1.0, 10.0, 10.0],
            vec![1.01, 10.0, 10.0],
            vec![1.02, 10.0, 10.0],
        ])
        .unwrap();
        assert_eq!(ranker.rank(&matrix).unwrap(), ranker.rank(&matrix).unwrap());
    }

    #[test]
    fn test_criterion_count_mismatch() {
        let ranker = seeded(three_criteria(), 1);
        let err = ranker.rank_rows(vec![vec![1.0, 2.0]]).unwrap_err();
        assert_eq!(
            err,
            RankError::CriterionCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_ragged_rows_fail_fast() {
        let ranker = seeded(three_criteria(), 1);
        let err = ranker
            .rank_rows(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]])
            .unwrap_err();
        assert!(matches!(err, RankError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = TopsisRanker::new(
            three_criteria(),
            RankingConfig::default().with_neutral_score(-1.0),
        )
        .unwrap_err();
        assert!(matches!(err, RankError::InvalidConfig(_)));
    }

    #[test]
    fn test_single_alternative() {
        let ranker = seeded(three_criteria(), 1);
        let result = ranker.rank_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(result.ranked.indices(), vec![1]);
        assert!(result.is_degenerate());
    }

    #[test]
    fn test_zero_weight_ignores_criterion() {
        let spec = CriterionSpec::new(vec![
            Criterion::cost("latency", 0.0),
            Criterion::benefit("cpu_free", 1.0),
        ])
        .unwrap();
        let ranker = seeded(spec, 1);
        let result = ranker
            .rank_rows(vec![vec![100.0, 900.0], vec![0.1, 100.0]])
            .unwrap();
        assert_eq!(result.scored.indices(), vec![1, 2]);
    }

    #[test]
    fn test_rank_batch_matches_single_runs() {
        let ranker = seeded(three_criteria(), 100);
        let matrices = vec![
            DecisionMatrix::new(vec![vec![1.0, 1.0, 1.0]; 3]).unwrap(),
            DecisionMatrix::new(vec![vec![1.0, 5.0, 2.0], vec![2.0, 1.0, 1.0]]).unwrap(),
        ];
        let batch = ranker.rank_batch(&matrices);
        assert_eq!(batch.len(), 2);

        for (i, (matrix, result)) in matrices.iter().zip(batch).enumerate() {
            let expected = ranker
                .rank_with_rng(matrix, &mut StdRng::seed_from_u64(100 + i as u64))
                .unwrap();
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_solutions_follow_directions() {
        let ranker = seeded(three_criteria(), 1);
        let result = ranker
            .rank_rows(vec![vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0]])
            .unwrap();
        let dirs = ranker.spec().directions();
        assert_eq!(dirs[0], Direction::Minimize);
        assert!(result.solutions.ideal[0] < result.solutions.anti_ideal[0]);
        assert!(result.solutions.ideal[1] > result.solutions.anti_ideal[1]);
    }
}

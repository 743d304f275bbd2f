//! Distance-based closeness to the ideal solution.

use super::ideal::IdealVectors;
use super::matrix::DecisionMatrix;

/// Euclidean distance `sqrt(sum_k (a_k - s_k)^2)`.
///
/// Both slices must have the same length.
pub fn euclidean_distance(alternative: &[f64], solution: &[f64]) -> f64 {
    debug_assert_eq!(alternative.len(), solution.len());
    alternative
        .iter()
        .zip(solution)
        .map(|(a, s)| (a - s) * (a - s))
        .sum::<f64>()
        .sqrt()
}

/// Relative closeness `d_anti / (d_ideal + d_anti)` for every alternative.
///
/// If both distances are zero the ratio is undefined; the alternative gets
/// `neutral_score` instead. With a non-degenerate solution space every
/// score lies in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_topsis::criteria::Direction;
/// use u_topsis::topsis::{preference_scores, DecisionMatrix, IdealVectors};
///
/// let m = DecisionMatrix::new(vec![vec![0.0], vec![1.0]]).unwrap();
/// let iv = IdealVectors::solve(&m, &[Direction::Maximize]).unwrap();
/// assert_eq!(preference_scores(&m, &iv, 0.5), vec![0.0, 1.0]);
/// ```
pub fn preference_scores(
    weighted: &DecisionMatrix,
    solutions: &IdealVectors,
    neutral_score: f64,
) -> Vec<f64> {
    weighted
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let d_ideal = euclidean_distance(row, &solutions.ideal);
            let d_anti = euclidean_distance(row, &solutions.anti_ideal);
            let total = d_ideal + d_anti;
            tracing::trace!(alternative = i + 1, d_ideal, d_anti, "distances");
            if total == 0.0 {
                neutral_score
            } else {
                d_anti / total
            }
        })
        .collect()
}

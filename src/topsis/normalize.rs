//! Vector normalization and criterion weighting.
//!
//! # References
//!
//! Hwang & Yoon (1981), "Multiple Attribute Decision Making", Ch. 4

use super::matrix::DecisionMatrix;
use crate::error::{RankError, Result};

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Matrix with every non-degenerate column scaled to unit Euclidean norm.
    pub matrix: DecisionMatrix,

    /// Columns whose norm was zero. They are all-zero in `matrix`.
    pub degenerate_columns: Vec<usize>,
}

/// Divides every column by its Euclidean norm `sqrt(sum_i x_ij^2)`.
///
/// A column with zero norm (every alternative reports 0) cannot be scaled;
/// it is emitted as all zeros and listed in
/// [`Normalized::degenerate_columns`], so it contributes nothing to the
/// distances downstream.
///
/// # Examples
///
/// ```
/// use u_topsis::topsis::{normalize, DecisionMatrix};
///
/// let m = DecisionMatrix::new(vec![vec![3.0, 0.0], vec![4.0, 0.0]]).unwrap();
/// let n = normalize(&m);
/// assert!((n.matrix.get(0, 0) - 0.6).abs() < 1e-12);
/// assert!((n.matrix.get(1, 0) - 0.8).abs() < 1e-12);
/// assert_eq!(n.degenerate_columns, vec![1]);
/// ```
pub fn normalize(matrix: &DecisionMatrix) -> Normalized {
    let cols = matrix.n_criteria();
    let norms: Vec<f64> = (0..cols).map(|j| column_norm(matrix, j)).collect();

    let degenerate_columns: Vec<usize> = norms
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n == 0.0)
        .map(|(j, _)| j)
        .collect();

    let rows: Vec<Vec<f64>> = matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(&norms)
                .map(|(&v, &norm)| if norm == 0.0 { 0.0 } else { v / norm })
                .collect()
        })
        .collect();

    Normalized {
        matrix: DecisionMatrix::from_rows_unchecked(rows, cols),
        degenerate_columns,
    }
}

/// Euclidean norm of column `j`, scaled by the largest magnitude first so
/// squaring neither overflows nor underflows.
fn column_norm(matrix: &DecisionMatrix, j: usize) -> f64 {
    let scale = matrix.column(j).fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let sum: f64 = matrix.column(j).map(|v| (v / scale).powi(2)).sum();
    scale * sum.sqrt()
}

/// Multiplies column `j` by `weights[j]`.
///
/// Weights are used as given; they are not rescaled to sum to 1.
pub fn apply_weights(matrix: &DecisionMatrix, weights: &[f64]) -> Result<DecisionMatrix> {
    if weights.len() != matrix.n_criteria() {
        return Err(RankError::CriterionCountMismatch {
            expected: weights.len(),
            actual: matrix.n_criteria(),
        });
    }
    let rows: Vec<Vec<f64>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
        .collect();
    Ok(DecisionMatrix::from_rows_unchecked(rows, matrix.n_criteria()))
}

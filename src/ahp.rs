//! Criterion weights from pairwise comparisons.
//!
//! Analytic Hierarchy Process, approximate method: each column of the
//! pairwise matrix is divided by its sum and the rows of the result are
//! averaged. Entry `a[i][j]` states how much more important criterion `i`
//! is than criterion `j` on Saaty's 1–9 scale (`a[j][i] = 1 / a[i][j]`).
//!
//! # References
//!
//! Saaty (1980), "The Analytic Hierarchy Process"

use crate::error::{RankError, Result};

/// Derives normalized criterion weights (summing to 1).
///
/// # Examples
///
/// ```
/// use u_topsis::ahp::derive_weights;
///
/// // Criterion 0 is three times as important as criterion 1.
/// let w = derive_weights(&[vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]]).unwrap();
/// assert!((w[0] - 0.75).abs() < 1e-12);
/// assert!((w[1] - 0.25).abs() < 1e-12);
/// ```
pub fn derive_weights(pairwise: &[Vec<f64>]) -> Result<Vec<f64>> {
    let n = pairwise.len();
    if n == 0 {
        return Err(RankError::InvalidComparisonMatrix("matrix is empty".into()));
    }
    for (i, row) in pairwise.iter().enumerate() {
        if row.len() != n {
            return Err(RankError::InvalidComparisonMatrix(format!(
                "row {i} has {} entries, expected {n}",
                row.len()
            )));
        }
        if let Some(&v) = row.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(RankError::InvalidComparisonMatrix(format!(
                "row {i} contains non-positive entry {v}"
            )));
        }
    }

    let column_sums: Vec<f64> = (0..n)
        .map(|j| pairwise.iter().map(|row| row[j]).sum())
        .collect();

    let weights = pairwise
        .iter()
        .map(|row| {
            row.iter()
                .zip(&column_sums)
                .map(|(v, sum)| v / sum)
                .sum::<f64>()
                / n as f64
        })
        .collect();

    Ok(weights)
}

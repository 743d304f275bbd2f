//! Rectangular decision matrix.

use crate::error::{RankError, Result};

/// Rows are alternatives, columns are criteria.
///
/// Every stage of the pipeline consumes a matrix by reference and returns a
/// new one; matrices are never mutated after construction.
///
/// # Examples
///
/// ```
/// use u_topsis::topsis::DecisionMatrix;
///
/// let m = DecisionMatrix::new(vec![vec![1.0, 100.0], vec![2.0, 50.0]]).unwrap();
/// assert_eq!(m.n_alternatives(), 2);
/// assert_eq!(m.n_criteria(), 2);
/// assert!((m.get(1, 1) - 50.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    n_criteria: usize,
}

impl DecisionMatrix {
    /// Builds a matrix, rejecting empty, ragged or non-finite input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_criteria = rows.first().map(Vec::len).unwrap_or(0);
        if n_criteria == 0 {
            return Err(RankError::EmptyMatrix);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_criteria {
                return Err(RankError::RaggedRow {
                    row: i,
                    expected: n_criteria,
                    actual: row.len(),
                });
            }
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(RankError::NonFiniteValue {
                    row: i,
                    column: j,
                    value,
                });
            }
        }
        Ok(Self { rows, n_criteria })
    }

    /// Internal constructor for stage outputs derived from a valid matrix.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<f64>>, n_criteria: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == n_criteria));
        Self { rows, n_criteria }
    }

    pub fn n_alternatives(&self) -> usize {
        self.rows.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.n_criteria
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Iterates over the values of column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |r| r[j])
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = RankError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(m: DecisionMatrix) -> Self {
        m.rows
    }
}

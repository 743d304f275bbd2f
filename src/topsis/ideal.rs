//! Ideal and anti-ideal reference points.

use super::matrix::DecisionMatrix;
use crate::criteria::Direction;
use crate::error::{RankError, Result};

/// Best-possible and worst-possible synthetic alternatives.
///
/// Built per criterion from the weighted matrix:
///
/// | direction  | ideal      | anti-ideal |
/// |------------|------------|------------|
/// | `Minimize` | column min | column max |
/// | `Maximize` | column max | column min |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdealVectors {
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
}

impl IdealVectors {
    /// Derives both vectors from a weighted matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_topsis::criteria::Direction;
    /// use u_topsis::topsis::{DecisionMatrix, IdealVectors};
    ///
    /// let m = DecisionMatrix::new(vec![vec![1.0, 1.0], vec![3.0, 3.0]]).unwrap();
    /// let iv = IdealVectors::solve(&m, &[Direction::Minimize, Direction::Maximize]).unwrap();
    /// assert_eq!(iv.ideal, vec![1.0, 3.0]);
    /// assert_eq!(iv.anti_ideal, vec![3.0, 1.0]);
    /// ```
    pub fn solve(weighted: &DecisionMatrix, directions: &[Direction]) -> Result<Self> {
        if directions.len() != weighted.n_criteria() {
            return Err(RankError::CriterionCountMismatch {
                expected: directions.len(),
                actual: weighted.n_criteria(),
            });
        }

        let (ideal, anti_ideal): (Vec<f64>, Vec<f64>) = directions
            .iter()
            .enumerate()
            .map(|(j, direction)| {
                let (min, max) = weighted
                    .column(j)
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                        (lo.min(v), hi.max(v))
                    });
                match direction {
                    Direction::Minimize => (min, max),
                    Direction::Maximize => (max, min),
                }
            })
            .unzip();

        Ok(Self { ideal, anti_ideal })
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.ideal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideal.is_empty()
    }

    /// `true` when ideal and anti-ideal coincide in every criterion, i.e.
    /// no criterion separates the alternatives.
    pub fn is_degenerate(&self) -> bool {
        self.ideal
            .iter()
            .zip(&self.anti_ideal)
            .all(|(a, b)| a == b)
    }
}

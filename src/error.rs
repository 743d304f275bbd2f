//! Error and degeneracy types.
//!
//! Shape and configuration problems are fatal and surface as [`RankError`]
//! before any numeric work starts. Numeric degeneracies never abort a run;
//! they are reported as [`Degeneracy`] values next to the ranking.

use thiserror::Error;

/// Fatal errors raised by the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("decision matrix must have at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("criterion table must define at least one criterion")]
    EmptyCriterionTable,

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("criterion table has {expected} criteria but the matrix has {actual} columns")]
    CriterionCountMismatch { expected: usize, actual: usize },

    #[error("value at row {row}, column {column} is not finite ({value})")]
    NonFiniteValue { row: usize, column: usize, value: f64 },

    #[error("criterion '{criterion}' has invalid weight {weight}")]
    InvalidWeight { criterion: String, weight: f64 },

    #[error("criterion '{0}' is defined more than once")]
    DuplicateCriterion(String),

    #[error("unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("missing value for criterion '{0}'")]
    MissingCriterion(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid pairwise comparison matrix: {0}")]
    InvalidComparisonMatrix(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RankError>;

/// A numeric degeneracy detected and absorbed during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Degeneracy {
    /// The column's Euclidean norm is zero; it was normalized to all zeros.
    DegenerateColumn { column: usize },

    /// Ideal and anti-ideal coincide in every criterion; every alternative
    /// received the neutral score.
    DegenerateSolutionSpace,
}

//! Named criterion table.
//!
//! [`CriterionSpec`] is fixed configuration: the set of criteria, their
//! weights and their directions. Feature rows are matched to it by name so
//! that adding or reordering criteria cannot silently misalign columns.

use super::types::{Criterion, Direction};
use crate::error::{RankError, Result};

/// Criterion names of [`CriterionSpec::delegation_default`].
pub mod names {
    pub const LATENCY: &str = "latency";
    pub const NODES: &str = "nodes";
    pub const MEMORY_FREE: &str = "memory_free";
    pub const CPU_FREE: &str = "cpu_free";
    pub const AVG_EXECUTION_TIME: &str = "avg_execution_time";
    pub const PENDING_JOBS: &str = "pending_jobs";
}

/// Ordered, validated table of criteria.
///
/// Column `j` of every decision matrix ranked against this table holds the
/// values of `criteria()[j]`.
///
/// # Examples
///
/// ```
/// use u_topsis::criteria::{Criterion, CriterionSpec};
///
/// let spec = CriterionSpec::new(vec![
///     Criterion::cost("latency", 1.0),
///     Criterion::benefit("cpu_free", 3.0),
/// ])
/// .unwrap();
///
/// let row = spec
///     .row_from_pairs(&[("cpu_free", 1500.0), ("latency", 0.2)])
///     .unwrap();
/// assert_eq!(row, vec![0.2, 1500.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Criterion>", into = "Vec<Criterion>"))]
pub struct CriterionSpec {
    criteria: Vec<Criterion>,
}

impl CriterionSpec {
    /// Builds the table, rejecting empty tables, duplicate names and
    /// negative or non-finite weights.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self> {
        if criteria.is_empty() {
            return Err(RankError::EmptyCriterionTable);
        }
        for (j, c) in criteria.iter().enumerate() {
            if !c.weight.is_finite() || c.weight < 0.0 {
                return Err(RankError::InvalidWeight {
                    criterion: c.name.clone(),
                    weight: c.weight,
                });
            }
            if criteria[..j].iter().any(|other| other.name == c.name) {
                return Err(RankError::DuplicateCriterion(c.name.clone()));
            }
        }
        Ok(Self { criteria })
    }

    /// Six-criterion table used to rank delegation targets.
    ///
    /// | criterion            | direction | weight | sentinel |
    /// |----------------------|-----------|--------|----------|
    /// | `latency`            | minimize  | 1      | 20       |
    /// | `nodes`              | maximize  | 8      | 0        |
    /// | `memory_free`        | maximize  | 18     | 0        |
    /// | `cpu_free`           | maximize  | 65     | 0        |
    /// | `avg_execution_time` | minimize  | 2      | 1e6      |
    /// | `pending_jobs`       | minimize  | 6      | 1e6      |
    pub fn delegation_default() -> Self {
        Self {
            criteria: vec![
                Criterion::cost(names::LATENCY, 1.0).with_sentinel(20.0),
                Criterion::benefit(names::NODES, 8.0),
                Criterion::benefit(names::MEMORY_FREE, 18.0),
                Criterion::benefit(names::CPU_FREE, 65.0),
                Criterion::cost(names::AVG_EXECUTION_TIME, 2.0),
                Criterion::cost(names::PENDING_JOBS, 6.0),
            ],
        }
    }

    /// Returns a copy with weights replaced, in criterion order.
    pub fn with_weights(&self, weights: &[f64]) -> Result<Self> {
        if weights.len() != self.criteria.len() {
            return Err(RankError::CriterionCountMismatch {
                expected: self.criteria.len(),
                actual: weights.len(),
            });
        }
        let criteria = self
            .criteria
            .iter()
            .zip(weights)
            .map(|(c, &w)| Criterion {
                weight: w,
                ..c.clone()
            })
            .collect();
        Self::new(criteria)
    }

    /// Number of criteria (matrix columns).
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Column index of a criterion.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }

    /// Looks up a criterion by name.
    pub fn get(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.criteria.iter().map(|c| c.direction).collect()
    }

    /// Builds a feature row from `(name, value)` pairs in any order.
    ///
    /// Every criterion must be given exactly once; unknown names are rejected.
    pub fn row_from_pairs(&self, pairs: &[(&str, f64)]) -> Result<Vec<f64>> {
        let mut row: Vec<Option<f64>> = vec![None; self.criteria.len()];
        for &(name, value) in pairs {
            let j = self
                .index_of(name)
                .ok_or_else(|| RankError::UnknownCriterion(name.to_string()))?;
            if row[j].replace(value).is_some() {
                return Err(RankError::DuplicateCriterion(name.to_string()));
            }
        }
        row.into_iter()
            .zip(&self.criteria)
            .map(|(v, c)| v.ok_or_else(|| RankError::MissingCriterion(c.name.clone())))
            .collect()
    }

    /// Row describing an unreachable or ineligible target.
    pub fn sentinel_row(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.sentinel).collect()
    }
}

impl TryFrom<Vec<Criterion>> for CriterionSpec {
    type Error = RankError;

    fn try_from(criteria: Vec<Criterion>) -> Result<Self> {
        Self::new(criteria)
    }
}

impl From<CriterionSpec> for Vec<Criterion> {
    fn from(spec: CriterionSpec) -> Self {
        spec.criteria
    }
}

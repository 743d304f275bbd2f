//! Criterion definitions.

/// Whether lower or higher values of a criterion are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Cost-type criterion: lower is better (latency, pending jobs).
    Minimize,

    /// Benefit-type criterion: higher is better (free CPU, free memory).
    Maximize,
}

impl Direction {
    /// Returns `true` for cost-type criteria.
    pub fn is_cost(self) -> bool {
        matches!(self, Direction::Minimize)
    }
}

/// One measured dimension used to compare alternatives.
///
/// # Examples
///
/// ```
/// use u_topsis::criteria::{Criterion, Direction};
///
/// let latency = Criterion::cost("latency", 1.0).with_sentinel(20.0);
/// assert_eq!(latency.direction, Direction::Minimize);
/// assert!((latency.sentinel - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    /// Stable identity of the criterion. Rows are matched to columns by name.
    pub name: String,

    /// Non-negative weight. Weights need not sum to 1.
    pub weight: f64,

    /// Preferred direction.
    pub direction: Direction,

    /// Value reported for an unreachable or ineligible target.
    ///
    /// Defaults to `1e6` for cost-type and `0.0` for benefit-type criteria,
    /// so a sentinel row never wins under a correct direction table.
    pub sentinel: f64,
}

impl Criterion {
    /// Creates a criterion with the default sentinel for its direction.
    pub fn new(name: impl Into<String>, weight: f64, direction: Direction) -> Self {
        let sentinel = match direction {
            Direction::Minimize => 1e6,
            Direction::Maximize => 0.0,
        };
        Self {
            name: name.into(),
            weight,
            direction,
            sentinel,
        }
    }

    /// Creates a cost-type (minimized) criterion.
    pub fn cost(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, Direction::Minimize)
    }

    /// Creates a benefit-type (maximized) criterion.
    pub fn benefit(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, Direction::Maximize)
    }

    /// Overrides the sentinel value.
    pub fn with_sentinel(mut self, value: f64) -> Self {
        self.sentinel = value;
        self
    }
}

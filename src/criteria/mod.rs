//! Criterion configuration.
//!
//! A criterion is one measured dimension (latency, free CPU, ...) with a
//! weight and a direction. The direction table is the crux of the ranking:
//! treating every criterion as "higher is better" silently inverts the
//! order for cost-type criteria.

mod spec;
mod types;

pub use spec::{names, CriterionSpec};
pub use types::{Criterion, Direction};

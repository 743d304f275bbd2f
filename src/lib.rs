//! Multi-criteria ranking of execution targets.
//!
//! Ranks a set of candidate targets (clusters, nodes, sites) described by
//! numeric criteria and picks where work should go:
//!
//! - **TOPSIS**: vector normalization, weighting, direction-aware
//!   ideal/anti-ideal solutions and closeness scores in `[0, 1]`.
//! - **Ranking**: stable best-first ordering with randomized breaking of
//!   near-ties, so small numeric edges do not always win.
//! - **Pipeline**: [`pipeline::TopsisRanker`] runs every stage over one
//!   decision matrix, absorbing numeric degeneracies.
//! - **Delegation**: static, random, load-based or TOPSIS policies that
//!   turn probed targets into an ordered plan with scheduler priorities.
//! - **AHP**: criterion weights derived from pairwise comparisons.
//!
//! # Architecture
//!
//! Stages are pure functions over owned or borrowed matrices; the only
//! state is the caller's random number generator. Collecting the metrics
//! that fill a decision matrix happens outside this crate.

pub mod ahp;
pub mod criteria;
pub mod delegation;
pub mod error;
pub mod pipeline;
pub mod priority;
pub mod ranking;
pub mod topsis;

pub use error::{Degeneracy, RankError, Result};

//! Ranking and near-tie randomization.
//!
//! [`rank_alternatives`] orders preference scores best first;
//! [`randomize_near_ties`] then shuffles the alternatives whose score sits
//! within a relative band of the best, so that a fixed small numeric edge
//! does not win every scheduling decision.

mod near_tie;
mod ranker;
mod types;

pub use near_tie::{near_tie_threshold, nearby_positions, randomize_near_ties};
pub use ranker::rank_alternatives;
pub use types::{Alternative, RankedList};

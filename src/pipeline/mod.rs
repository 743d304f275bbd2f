//! End-to-end ranking pipeline.
//!
//! [`TopsisRanker`] runs normalize → weight → ideal/anti-ideal →
//! preference scores → rank → near-tie shuffle over one decision matrix.
//! Shape and configuration errors are reported before any computation;
//! numeric degeneracies are absorbed and listed in
//! [`RankingResult::degeneracies`].

mod config;
mod runner;

pub use config::RankingConfig;
pub use runner::{RankingResult, TopsisRanker};

pub(crate) use runner::make_rng;

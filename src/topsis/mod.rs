//! TOPSIS scoring stages.
//!
//! Technique for Order of Preference by Similarity to Ideal Solution.
//! Each stage is a pure function over the previous stage's output:
//!
//! 1. [`normalize`]: column-wise vector normalization
//! 2. [`apply_weights`]: per-criterion weighting
//! 3. [`IdealVectors::solve`]: direction-aware ideal / anti-ideal
//! 4. [`euclidean_distance`]: distance to a reference point
//! 5. [`preference_scores`]: closeness to ideal in `[0, 1]`
//!
//! # References
//!
//! - Hwang & Yoon (1981), "Multiple Attribute Decision Making: Methods and
//!   Applications"
//! - Behzadian et al. (2012), "A state-of-the-art survey of TOPSIS
//!   applications", Expert Systems with Applications 39(17)

mod ideal;
mod matrix;
mod normalize;
mod preference;

pub use ideal::IdealVectors;
pub use matrix::DecisionMatrix;
pub use normalize::{apply_weights, normalize, Normalized};
pub use preference::{euclidean_distance, preference_scores};

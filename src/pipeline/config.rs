//! Ranking pipeline configuration.

/// Configuration for [`TopsisRanker`](super::TopsisRanker).
///
/// # Examples
///
/// ```
/// use u_topsis::pipeline::RankingConfig;
///
/// let config = RankingConfig::default()
///     .with_near_tie_ratio(1.0 / 3.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankingConfig {
    /// Near-tie band as a fraction of the best score.
    ///
    /// Alternatives scoring within `best * near_tie_ratio` of the best are
    /// shuffled together. `0.0` disables the shuffle, except when every
    /// alternative received the neutral score: such a tie is always shuffled.
    pub near_tie_ratio: f64,

    /// Score assigned when ideal and anti-ideal coincide. Must be in `[0, 1]`.
    pub neutral_score: f64,

    /// Random seed for the near-tie shuffle.
    ///
    /// `None` draws a fresh seed from system entropy on every run.
    pub seed: Option<u64>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            near_tie_ratio: 0.1,
            neutral_score: 0.5,
            seed: None,
        }
    }
}

impl RankingConfig {
    pub fn with_near_tie_ratio(mut self, ratio: f64) -> Self {
        self.near_tie_ratio = ratio;
        self
    }

    pub fn with_neutral_score(mut self, score: f64) -> Self {
        self.neutral_score = score;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.near_tie_ratio.is_finite() || self.near_tie_ratio < 0.0 {
            return Err(format!(
                "near_tie_ratio must be a non-negative number, got {}",
                self.near_tie_ratio
            ));
        }
        if !(0.0..=1.0).contains(&self.neutral_score) {
            return Err(format!(
                "neutral_score must be in [0, 1], got {}",
                self.neutral_score
            ));
        }
        Ok(())
    }
}

//! Delegation configuration.

use crate::pipeline::RankingConfig;

/// How targets are prioritized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DelegationPolicy {
    /// Keep each target's configured priority.
    Static,

    /// Uniform random priority in `1..=100` for eligible targets.
    Random,

    /// Priority from total free CPU: more free CPU, lower priority number.
    LoadBased,

    /// Multi-criteria ranking of all targets.
    #[default]
    Topsis,
}

/// Configuration for [`Delegator`](super::Delegator).
///
/// # Examples
///
/// ```
/// use u_topsis::delegation::{DelegationConfig, DelegationPolicy};
///
/// let config = DelegationConfig::default()
///     .with_policy(DelegationPolicy::LoadBased)
///     .with_service_cpu(1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DelegationConfig {
    pub policy: DelegationPolicy,

    /// CPU requested by the service, in cores.
    ///
    /// A target is eligible only if one node has this much CPU free.
    pub service_cpu: f64,

    /// Free CPU (millicores) that maps to priority 0 under
    /// [`DelegationPolicy::LoadBased`].
    pub cpu_capacity: f64,

    /// Ranking parameters for [`DelegationPolicy::Topsis`]. The seed also
    /// drives [`DelegationPolicy::Random`].
    pub ranking: RankingConfig,
}

impl Default for DelegationConfig {
    fn default() -> Self {
        Self {
            policy: DelegationPolicy::default(),
            service_cpu: 0.5,
            cpu_capacity: 4000.0,
            ranking: RankingConfig::default(),
        }
    }
}

impl DelegationConfig {
    pub fn with_policy(mut self, policy: DelegationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_service_cpu(mut self, cores: f64) -> Self {
        self.service_cpu = cores;
        self
    }

    pub fn with_cpu_capacity(mut self, millicores: f64) -> Self {
        self.cpu_capacity = millicores;
        self
    }

    pub fn with_ranking(mut self, ranking: RankingConfig) -> Self {
        self.ranking = ranking;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.service_cpu.is_finite() || self.service_cpu < 0.0 {
            return Err(format!(
                "service_cpu must be non-negative, got {}",
                self.service_cpu
            ));
        }
        if !self.cpu_capacity.is_finite() || self.cpu_capacity <= 0.0 {
            return Err(format!(
                "cpu_capacity must be positive, got {}",
                self.cpu_capacity
            ));
        }
        self.ranking.validate()
    }
}

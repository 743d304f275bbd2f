//! Delegation planning.

use rand::Rng;

use super::config::{DelegationConfig, DelegationPolicy};
use super::types::{Delegation, Target};
use crate::criteria::CriterionSpec;
use crate::error::{RankError, Result};
use crate::pipeline::{make_rng, RankingResult, TopsisRanker};
use crate::priority::{map_to_priority, preference_priority, MAX_PRIORITY, NO_DELEGATE_PRIORITY};
use crate::topsis::DecisionMatrix;

/// Ordered delegation decisions for one service.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelegationPlan {
    /// Targets in the order work should be offered to them.
    pub delegations: Vec<Delegation>,

    /// Ranking details when the policy was [`DelegationPolicy::Topsis`].
    pub ranking: Option<RankingResult>,
}

impl DelegationPlan {
    /// The first target that may receive work.
    pub fn first_choice(&self) -> Option<&Delegation> {
        self.delegations
            .iter()
            .find(|d| d.priority < NO_DELEGATE_PRIORITY)
    }
}

/// Turns probed targets into a delegation plan.
#[derive(Debug, Clone)]
pub struct Delegator {
    ranker: TopsisRanker,
    config: DelegationConfig,
}

impl Delegator {
    /// Creates a delegator ranking against `spec`.
    ///
    /// With [`DelegationPolicy::Topsis`] the criterion names must match
    /// [`Observation::feature_pairs`](super::Observation::feature_pairs).
    pub fn new(spec: CriterionSpec, config: DelegationConfig) -> Result<Self> {
        config.validate().map_err(RankError::InvalidConfig)?;
        let ranker = TopsisRanker::new(spec, config.ranking.clone())?;
        Ok(Self { ranker, config })
    }

    pub fn config(&self) -> &DelegationConfig {
        &self.config
    }

    /// Plans using the configured seed, or system entropy.
    pub fn plan(&self, targets: &[Target]) -> Result<DelegationPlan> {
        self.plan_with_rng(targets, &mut make_rng(self.config.ranking.seed))
    }

    pub fn plan_with_rng<R: Rng + ?Sized>(
        &self,
        targets: &[Target],
        rng: &mut R,
    ) -> Result<DelegationPlan> {
        if targets.is_empty() {
            return Ok(DelegationPlan {
                delegations: Vec::new(),
                ranking: None,
            });
        }

        let service_cpu = self.config.service_cpu;
        let plan = match self.config.policy {
            DelegationPolicy::Static => by_priority(targets, |target| target.priority),
            DelegationPolicy::Random => by_priority(targets, |target| {
                match target.probe.eligible(service_cpu) {
                    Some(_) => rng.random_range(1..=MAX_PRIORITY),
                    None => skip(target),
                }
            }),
            DelegationPolicy::LoadBased => by_priority(targets, |target| {
                match target.probe.eligible(service_cpu) {
                    Some(obs) => map_to_priority(
                        obs.cpu_free_total,
                        0.0,
                        self.config.cpu_capacity,
                        MAX_PRIORITY,
                        0,
                    ),
                    None => skip(target),
                }
            }),
            DelegationPolicy::Topsis => self.plan_topsis(targets, rng)?,
        };

        let skipped = plan
            .delegations
            .iter()
            .filter(|d| d.priority == NO_DELEGATE_PRIORITY)
            .count();
        tracing::debug!(
            policy = ?self.config.policy,
            targets = targets.len(),
            skipped,
            first = ?plan.first_choice().map(|d| d.name.as_str()),
            "delegation plan ready"
        );

        Ok(plan)
    }

    fn plan_topsis<R: Rng + ?Sized>(
        &self,
        targets: &[Target],
        rng: &mut R,
    ) -> Result<DelegationPlan> {
        let rows = targets
            .iter()
            .map(|t| t.probe.feature_row(self.ranker.spec(), self.config.service_cpu))
            .collect::<Result<Vec<_>>>()?;
        let result = self
            .ranker
            .rank_with_rng(&DecisionMatrix::new(rows)?, rng)?;

        let delegations = result
            .ranked
            .iter()
            .map(|alt| {
                let target = &targets[alt.index - 1];
                let priority = match target.probe.eligible(self.config.service_cpu) {
                    Some(_) => preference_priority(alt.score),
                    None => skip(target),
                };
                Delegation {
                    target: alt.index - 1,
                    name: target.name.clone(),
                    priority,
                }
            })
            .collect();

        Ok(DelegationPlan {
            delegations,
            ranking: Some(result),
        })
    }
}

/// Priority for a target that cannot take work.
fn skip(target: &Target) -> u32 {
    tracing::warn!(target_name = %target.name, "target unreachable or too small for the service");
    NO_DELEGATE_PRIORITY
}

/// Assigns priorities in input order, then sorts ascending (stable).
fn by_priority(targets: &[Target], mut priority: impl FnMut(&Target) -> u32) -> DelegationPlan {
    let mut delegations: Vec<Delegation> = targets
        .iter()
        .enumerate()
        .map(|(i, target)| Delegation {
            target: i,
            name: target.name.clone(),
            priority: priority(target),
        })
        .collect();
    delegations.sort_by_key(|d| d.priority);

    DelegationPlan {
        delegations,
        ranking: None,
    }
}

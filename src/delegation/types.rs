//! Delegation targets and their observed metrics.

use crate::criteria::{names, CriterionSpec};
use crate::error::Result;

/// Added to the pending-job count so the column never has zero norm when
/// every queue is empty.
pub const PENDING_JOBS_OFFSET: f64 = 0.1;

/// Millicores per CPU core.
const MILLICORES: f64 = 1000.0;

/// Metrics collected for one target before ranking.
///
/// Gathering these (polling, authentication, decoding job logs) happens
/// upstream; this type only carries the numbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Round-trip time of the status probe, in seconds.
    pub latency_secs: f64,

    /// Number of worker nodes.
    pub number_nodes: u32,

    /// Free memory summed over all nodes, in bytes.
    pub memory_free_total: f64,

    /// Free CPU summed over all nodes, in millicores.
    pub cpu_free_total: f64,

    /// Largest free CPU on a single node, in millicores.
    pub cpu_max_free: f64,

    /// Mean duration of recently succeeded jobs, in seconds.
    pub average_execution_secs: f64,

    /// Jobs waiting to be scheduled.
    pub pending_jobs: u32,
}

impl Observation {
    /// `true` when one node has room for a service requesting
    /// `service_cpu` cores.
    pub fn fits(&self, service_cpu: f64) -> bool {
        self.cpu_max_free - MILLICORES * service_cpu >= 0.0
    }

    /// Named features for [`CriterionSpec::delegation_default`].
    pub fn feature_pairs(&self) -> [(&'static str, f64); 6] {
        [
            (names::LATENCY, self.latency_secs),
            (names::NODES, f64::from(self.number_nodes)),
            (names::MEMORY_FREE, self.memory_free_total),
            (names::CPU_FREE, self.cpu_free_total),
            (names::AVG_EXECUTION_TIME, self.average_execution_secs),
            (
                names::PENDING_JOBS,
                f64::from(self.pending_jobs) + PENDING_JOBS_OFFSET,
            ),
        ]
    }
}

/// Outcome of probing a target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Probe {
    Reachable(Observation),
    Unreachable,
}

impl Probe {
    /// The observation, if the target answered and can host the service.
    pub fn eligible(&self, service_cpu: f64) -> Option<&Observation> {
        match self {
            Probe::Reachable(obs) if obs.fits(service_cpu) => Some(obs),
            _ => None,
        }
    }

    /// Decision-matrix row for this target.
    ///
    /// Unreachable or undersized targets get the table's sentinel row so the
    /// matrix keeps one row per target.
    pub fn feature_row(&self, spec: &CriterionSpec, service_cpu: f64) -> Result<Vec<f64>> {
        match self.eligible(service_cpu) {
            Some(obs) => spec.row_from_pairs(&obs.feature_pairs()),
            None => Ok(spec.sentinel_row()),
        }
    }
}

/// A candidate execution target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub name: String,

    /// Manually configured priority, used by the static policy.
    pub priority: u32,

    pub probe: Probe,
}

impl Target {
    pub fn new(name: impl Into<String>, priority: u32, probe: Probe) -> Self {
        Self {
            name: name.into(),
            priority,
            probe,
        }
    }
}

/// One entry of a delegation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delegation {
    /// Position of the target in the input slice (0-based).
    pub target: usize,

    pub name: String,

    /// Lower is preferred. [`NO_DELEGATE_PRIORITY`](crate::priority::NO_DELEGATE_PRIORITY)
    /// means "do not send work here".
    pub priority: u32,
}

//! Target delegation.
//!
//! Turns probed execution targets into an ordered plan of where to send a
//! service's work. Four policies are available:
//!
//! - **Static**: manually configured priorities.
//! - **Random**: uniform random priorities among eligible targets.
//! - **LoadBased**: priority from total free CPU.
//! - **Topsis**: full multi-criteria ranking with near-tie randomization.
//!
//! A target is eligible when it answered its probe and one of its nodes has
//! enough free CPU for the service. Ineligible targets stay in the plan with
//! [`NO_DELEGATE_PRIORITY`](crate::priority::NO_DELEGATE_PRIORITY); under
//! `Topsis` they enter the decision matrix as sentinel rows.

mod config;
mod runner;
mod types;

pub use config::{DelegationConfig, DelegationPolicy};
pub use runner::{DelegationPlan, Delegator};
pub use types::{Delegation, Observation, Probe, Target, PENDING_JOBS_OFFSET};

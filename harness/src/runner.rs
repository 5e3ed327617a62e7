//! Harness runner: search a world, verify the plan, and record the run.
//!
//! # Pipeline
//!
//! ```text
//! policy digest → search() → verify_plan() (solved runs only)
//!   → cost cross-check → RunRecord → canonical JSON → content hash
//! ```
//!
//! The runner trusts nothing the search returns: a solved plan is replayed
//! against the world's own successor function before it is recorded.

use thiserror::Error;
use tracing::{debug, debug_span};

use wayfind_search::{
    search, verify_plan, Cost, ReplayError, SearchError, SearchPolicy, SearchStats, Strategy,
    TerminationReason,
};

use crate::contract::HarnessWorld;
use crate::digest::{
    canonical_hash, canonical_json_bytes, search_policy_digest, CanonError, ContentHash,
    DOMAIN_RUN_RECORD,
};

/// Schema tag carried by every run record.
pub const RUN_RECORD_SCHEMA: &str = "wayfind.run_record.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The returned plan did not replay to a goal.
    #[error("plan failed verification: {0}")]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Canon(#[from] CanonError),
    /// Replaying the plan gave a different cost than the search reported.
    #[error("search reported cost {reported} but replay costs {replayed}")]
    CostMismatch { reported: Cost, replayed: Cost },
}

/// The auditable summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub world_id: String,
    pub strategy: Strategy,
    pub policy: SearchPolicy,
    pub policy_digest: ContentHash,
    pub termination: TerminationReason,
    /// Action labels of the verified plan; `None` unless solved.
    pub actions: Option<Vec<String>>,
    pub cost: Option<Cost>,
    pub stats: SearchStats,
}

impl RunRecord {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": self.actions,
            "cost": self.cost,
            "outcome": self.termination.outcome().as_str(),
            "policy": self.policy.to_json(),
            "policy_digest": self.policy_digest.as_str(),
            "schema_version": RUN_RECORD_SCHEMA,
            "stats": self.stats.to_json(),
            "strategy": self.strategy.as_str(),
            "termination": self.termination.as_str(),
            "world_id": self.world_id,
        })
    }

    /// Canonical JSON bytes of [`RunRecord::to_json`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }

    /// `canonical_hash(DOMAIN_RUN_RECORD, canonical_bytes)`.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn content_hash(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(DOMAIN_RUN_RECORD, &self.canonical_bytes()?))
    }
}

/// Run `strategy` over `world` under `policy`.
///
/// Greedy and A* use [`HarnessWorld::estimate`] as the heuristic.
///
/// # Errors
///
/// - [`RunError::Search`] if the policy is rejected or a cost overflows.
/// - [`RunError::Replay`] if a solved plan does not replay to a goal.
/// - [`RunError::CostMismatch`] if the replayed cost differs from the
///   reported one.
/// - [`RunError::Canon`] if the policy projection cannot be canonicalized.
pub fn run_strategy<W: HarnessWorld + ?Sized>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<RunRecord, RunError> {
    let span = debug_span!("run", world_id = world.world_id(), strategy = strategy.as_str());
    let _enter = span.enter();

    let policy_digest = search_policy_digest(policy)?;
    let heuristic = |state: &W::State| world.estimate(state);
    let result = search(world, strategy, &heuristic, policy)?;

    let (actions, cost) = match &result.plan {
        Some(plan) => {
            let replayed = verify_plan(world, &plan.actions)?;
            if replayed.cost != plan.cost {
                return Err(RunError::CostMismatch {
                    reported: plan.cost,
                    replayed: replayed.cost,
                });
            }
            let labels = plan.actions.iter().map(|a| world.action_label(a)).collect();
            (Some(labels), Some(plan.cost))
        }
        None => (None, None),
    };

    debug!(
        termination = result.termination.as_str(),
        cost,
        expansions = result.stats.expansions,
        "run recorded"
    );

    Ok(RunRecord {
        world_id: world.world_id().to_owned(),
        strategy,
        policy: policy.clone(),
        policy_digest,
        termination: result.termination,
        actions,
        cost,
        stats: result.stats,
    })
}

/// [`run_strategy`] for every strategy, in [`Strategy::ALL`] order.
///
/// # Errors
///
/// Stops at the first failing run. A policy valid only for breadth-first
/// search fails on the first other strategy.
pub fn run_all_strategies<W: HarnessWorld + ?Sized>(
    world: &W,
    policy: &SearchPolicy,
) -> Result<Vec<RunRecord>, RunError> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| run_strategy(world, strategy, policy))
        .collect()
}

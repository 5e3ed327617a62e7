//! Iterative deepening: depth-limited tree-search DFS with limits 0, 1, 2, ...
//!
//! Memory stays proportional to the depth limit while the plan found is the
//! shallowest, as with breadth-first search. Shallow levels are re-expanded
//! on every iteration; the returned stats count every expansion.

use std::time::Instant;

use tracing::debug;

use crate::error::SearchError;
use crate::heuristic::ZeroHeuristic;
use crate::policy::SearchPolicy;
use crate::problem::SearchProblem;
use crate::report::{SearchStats, TerminationReason};
use crate::search::{search, SearchResult};
use crate::strategy::Strategy;

/// Run iterative deepening under `policy`.
///
/// Each iteration is a tree search, so `policy.mode` is ignored. The budgets
/// apply to the whole run: `max_expansions` and `deadline` are shared across
/// iterations, and `max_depth` caps the largest limit tried. On a cyclic
/// space without a reachable goal every iteration hits its limit, so the run
/// only ends on one of those budgets.
///
/// Terminates with:
/// - `GoalReached` at the first iteration that finds a goal.
/// - `FrontierExhausted` when an iteration ends without any depth cutoff.
/// - `DepthBudgetExceeded` when the `max_depth` iteration still had cutoffs.
/// - `ExpansionBudgetExceeded` or `DeadlineExceeded` from the budgets.
///
/// # Errors
///
/// Propagates [`SearchError`] from the per-iteration searches. Generation-time
/// goal testing is rejected as it is for depth-first search.
pub fn iterative_deepening_search<P: SearchProblem + ?Sized>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    policy.validate(Strategy::DepthFirst)?;

    let started = Instant::now();
    let mut stats = SearchStats::default();
    let mut log = Vec::new();
    let mut limit: u32 = 0;

    loop {
        let mut iteration = SearchPolicy::tree().with_max_depth(limit);
        iteration.goal_test = policy.goal_test;
        iteration.record_expansions = policy.record_expansions;
        if let Some(max) = policy.max_expansions {
            iteration.max_expansions = Some(max.saturating_sub(stats.expansions));
        }
        if let Some(deadline) = policy.deadline {
            iteration.deadline = Some(deadline.saturating_sub(started.elapsed()));
        }

        let result = search(problem, Strategy::DepthFirst, &ZeroHeuristic, &iteration)?;
        let offset = stats.expansions;
        log.extend(result.expansions.into_iter().map(|mut record| {
            record.expansion_order += offset;
            record
        }));
        stats.absorb(&result.stats);
        debug!(
            limit,
            termination = result.termination.as_str(),
            expansions = result.stats.expansions,
            "deepening iteration"
        );

        let cap_reached = policy.max_depth.is_some_and(|max| limit >= max);
        if result.termination != TerminationReason::DepthBudgetExceeded || cap_reached {
            return Ok(SearchResult {
                termination: result.termination,
                plan: result.plan,
                stats,
                expansions: log,
            });
        }
        limit += 1;
    }
}

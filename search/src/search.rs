//! Search entry points and the expansion loop.
//!
//! One driver serves every strategy. The strategy only selects the frontier
//! discipline:
//!
//! ```text
//! INITIALIZED: frontier = [root], closed = {}
//! RUNNING:     pop → (graph) skip if closed, else close → goal test
//!              → budget checks → expand, pushing unclosed successors
//! SUCCEEDED:   goal popped; plan = actions along parent links
//! EXHAUSTED:   frontier empty (proven), or a budget fired (aborted)
//! ```
//!
//! Goals are tested when a node is popped, not when it is generated, so a
//! cheaper path still in the frontier is never skipped. Under a consistent
//! heuristic the first pop of each state carries its optimal path cost,
//! which is why closing on first pop is safe for graph-search A*.
//!
//! Under a depth limit the closed set also remembers the depth each state
//! was closed at. A state reached again at a smaller depth is reopened, since
//! its earlier expansion had fewer levels left before the cutoff.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, debug_span, trace};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::node::{NodeArena, NodeId, Plan};
use crate::policy::{GoalTest, SearchMode, SearchPolicy};
use crate::problem::{Cost, SearchProblem, Successor};
use crate::report::{ExpansionRecord, Outcome, SearchStats, TerminationReason};
use crate::strategy::Strategy;

/// Result of a search invocation.
///
/// Check [`SearchResult::outcome`] before reading the plan: an empty plan
/// means "the start is a goal", never "no solution".
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    pub termination: TerminationReason,
    /// The solution, present iff `termination` is `GoalReached`.
    pub plan: Option<Plan<A>>,
    pub stats: SearchStats,
    /// Per-expansion log; empty unless `record_expansions` was set.
    pub expansions: Vec<ExpansionRecord<S>>,
}

impl<S, A> SearchResult<S, A> {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.termination.outcome()
    }

    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// The plan's actions, if solved.
    #[must_use]
    pub fn actions(&self) -> Option<&[A]> {
        self.plan.as_ref().map(|p| p.actions.as_slice())
    }

    /// The plan's cost, if solved.
    #[must_use]
    pub fn cost(&self) -> Option<Cost> {
        self.plan.as_ref().map(|p| p.cost)
    }
}

/// Run `strategy` over `problem`.
///
/// `heuristic` is consulted only by greedy and A*; pass [`ZeroHeuristic`]
/// for uninformed strategies. Exhaustion and budget aborts return
/// `Ok` with the corresponding [`TerminationReason`].
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails pre-flight validation.
/// - [`SearchError::CostOverflow`] if a path cost overflows.
pub fn search<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    policy.validate(strategy)?;

    let span = debug_span!(
        "search",
        strategy = strategy.as_str(),
        mode = policy.mode.as_str()
    );
    let _enter = span.enter();

    let started = Instant::now();
    let discipline = strategy.discipline();
    let graph_mode = policy.mode == SearchMode::Graph;
    let depth_limited = policy.max_depth.is_some();
    let estimate = |state: &P::State| {
        if discipline.uses_heuristic() {
            heuristic.estimate(state)
        } else {
            0
        }
    };

    let mut arena: NodeArena<P::State, P::Action> = NodeArena::new();
    let mut frontier = Frontier::for_discipline(discipline);
    let mut closed: HashMap<P::State, u32> = HashMap::new();
    let mut stats = SearchStats::default();
    let mut log = Vec::new();
    let mut goal: Option<NodeId> = None;

    let start = problem.start();
    let root_h = estimate(&start);
    let root = arena.push_root(start, root_h);
    frontier.push(root, discipline.priority(0, root_h));
    stats.frontier_high_water = 1;

    let termination = 'search: loop {
        let Some(node_id) = frontier.pop() else {
            break if stats.depth_cutoffs > 0 {
                TerminationReason::DepthBudgetExceeded
            } else {
                TerminationReason::FrontierExhausted
            };
        };
        let node = &arena[node_id];

        if graph_mode {
            if is_closed(&closed, &node.state, node.depth, depth_limited) {
                stats.stale_pops += 1;
                continue;
            }
            closed.insert(node.state.clone(), node.depth);
        }

        if problem.is_goal(&node.state) {
            goal = Some(node_id);
            break TerminationReason::GoalReached;
        }

        if policy
            .max_expansions
            .is_some_and(|max| stats.expansions >= max)
        {
            break TerminationReason::ExpansionBudgetExceeded;
        }
        if policy
            .deadline
            .is_some_and(|deadline| started.elapsed() >= deadline)
        {
            break TerminationReason::DeadlineExceeded;
        }

        let (depth, g_cost, h_cost) = (node.depth, node.g_cost, node.h_cost);
        let priority = discipline.priority(g_cost, h_cost);
        if policy.record_expansions {
            log.push(ExpansionRecord {
                expansion_order: stats.expansions,
                state: node.state.clone(),
                depth,
                g_cost,
                h_cost,
                priority,
            });
        }
        trace!(
            expansion = stats.expansions,
            depth,
            g_cost,
            h_cost,
            "expand"
        );
        let successors = problem.successors(&node.state);
        stats.expansions += 1;

        for Successor {
            state,
            action,
            cost,
        } in successors
        {
            if graph_mode && is_closed(&closed, &state, depth + 1, depth_limited) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            if policy.max_depth.is_some_and(|max| depth >= max) {
                stats.depth_cutoffs += 1;
                continue;
            }

            let child_g = g_cost
                .checked_add(cost)
                .ok_or(SearchError::CostOverflow {
                    depth: depth + 1,
                    g_cost,
                    step_cost: cost,
                })?;
            let child_h = estimate(&state);
            let goal_on_generation =
                policy.goal_test == GoalTest::OnGeneration && problem.is_goal(&state);

            let child = arena.push_child(node_id, state, action, child_g, child_h);
            stats.generated += 1;

            if goal_on_generation {
                goal = Some(child);
                break 'search TerminationReason::GoalReached;
            }

            frontier.push(child, discipline.priority(child_g, child_h));
            stats.frontier_high_water = stats.frontier_high_water.max(frontier.len() as u64);
        }
    };

    let plan = goal.and_then(|id| arena.plan_to(id));
    debug!(
        termination = termination.as_str(),
        expansions = stats.expansions,
        generated = stats.generated,
        plan_cost = plan.as_ref().map(|p| p.cost),
        "search finished"
    );

    Ok(SearchResult {
        termination,
        plan,
        stats,
        expansions: log,
    })
}

/// Whether `state`, reached at `depth`, is already covered by the closed set.
fn is_closed<S: Eq + Hash>(
    closed: &HashMap<S, u32>,
    state: &S,
    depth: u32,
    depth_limited: bool,
) -> bool {
    closed
        .get(state)
        .is_some_and(|&closed_at| !depth_limited || closed_at <= depth)
}

/// Graph-search depth-first search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn depth_first_search<P: SearchProblem + ?Sized>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    search(
        problem,
        Strategy::DepthFirst,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
}

/// Graph-search breadth-first search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn breadth_first_search<P: SearchProblem + ?Sized>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    search(
        problem,
        Strategy::BreadthFirst,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
}

/// Graph-search uniform-cost search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn uniform_cost_search<P: SearchProblem + ?Sized>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    search(
        problem,
        Strategy::UniformCost,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
}

/// Graph-search greedy best-first search with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn greedy_search<P, H>(
    problem: &P,
    heuristic: &H,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    search(
        problem,
        Strategy::Greedy,
        heuristic,
        &SearchPolicy::default(),
    )
}

/// Graph-search A* with the default policy.
///
/// # Errors
///
/// See [`search`].
pub fn a_star_search<P, H>(
    problem: &P,
    heuristic: &H,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    search(problem, Strategy::AStar, heuristic, &SearchPolicy::default())
}

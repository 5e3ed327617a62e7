//! Offline checks of the heuristic contract over a finite set of states.
//!
//! The driver never checks these properties; run them in tests.

use std::collections::{HashSet, VecDeque};

use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::problem::{Cost, RootedAt, SearchProblem};
use crate::search::uniform_cost_search;

/// States reachable from `problem.start()`, in breadth-first discovery
/// order, stopping after `limit` states.
#[must_use]
pub fn reachable_states<P: SearchProblem + ?Sized>(problem: &P, limit: usize) -> Vec<P::State> {
    let start = problem.start();
    let mut seen: HashSet<P::State> = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);
    let mut order = vec![start];

    while let Some(state) = queue.pop_front() {
        if order.len() >= limit {
            break;
        }
        for successor in problem.successors(&state) {
            if order.len() >= limit {
                break;
            }
            if seen.insert(successor.state.clone()) {
                order.push(successor.state.clone());
                queue.push_back(successor.state);
            }
        }
    }
    order.truncate(limit);
    order
}

/// An edge on which `h(from) > cost + h(to)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyViolation<S> {
    pub from: S,
    pub to: S,
    pub step_cost: Cost,
    pub h_from: Cost,
    pub h_to: Cost,
}

/// Every outgoing edge of `states` that breaks consistency.
#[must_use]
pub fn check_consistency<P, H>(
    problem: &P,
    heuristic: &H,
    states: &[P::State],
) -> Vec<ConsistencyViolation<P::State>>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    let mut violations = Vec::new();
    for from in states {
        let h_from = heuristic.estimate(from);
        for successor in problem.successors(from) {
            let h_to = heuristic.estimate(&successor.state);
            if h_from > successor.cost.saturating_add(h_to) {
                violations.push(ConsistencyViolation {
                    from: from.clone(),
                    to: successor.state,
                    step_cost: successor.cost,
                    h_from,
                    h_to,
                });
            }
        }
    }
    violations
}

/// A state whose estimate exceeds its true cost to the nearest goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissibilityViolation<S> {
    pub state: S,
    pub estimate: Cost,
    pub true_cost: Cost,
}

/// Every state in `states` at which `heuristic` overestimates.
///
/// True costs come from a uniform-cost search rooted at each state. States
/// that cannot reach a goal have infinite true cost and never violate.
///
/// # Errors
///
/// Propagates [`SearchError`] from the underlying uniform-cost searches.
pub fn check_admissibility<P, H>(
    problem: &P,
    heuristic: &H,
    states: &[P::State],
) -> Result<Vec<AdmissibilityViolation<P::State>>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    let mut violations = Vec::new();
    for state in states {
        let rooted = RootedAt::new(problem, state.clone());
        let Some(true_cost) = uniform_cost_search(&rooted)?.cost() else {
            continue;
        };
        let estimate = heuristic.estimate(state);
        if estimate > true_cost {
            violations.push(AdmissibilityViolation {
                state: state.clone(),
                estimate,
                true_cost,
            });
        }
    }
    Ok(violations)
}

/// Goal states among `states` whose estimate is not 0.
#[must_use]
pub fn check_goal_estimates<P, H>(
    problem: &P,
    heuristic: &H,
    states: &[P::State],
) -> Vec<(P::State, Cost)>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    states
        .iter()
        .filter(|s| problem.is_goal(s))
        .map(|s| (s.clone(), heuristic.estimate(s)))
        .filter(|&(_, h)| h != 0)
        .collect()
}

/// Whether `a` estimates at least as high as `b` on every state given.
#[must_use]
pub fn dominates<S, A, B>(a: &A, b: &B, states: &[S]) -> bool
where
    A: Heuristic<S> + ?Sized,
    B: Heuristic<S> + ?Sized,
{
    states.iter().all(|s| a.estimate(s) >= b.estimate(s))
}

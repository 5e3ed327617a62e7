//! Exhaustive optimal-cost oracle for small problems.
//!
//! Enumerates every simple path from the start, so it is exponential in the
//! number of states. Meant for cross-checking the engine on graphs of up to
//! about 20 states.

use std::collections::HashSet;

use wayfind_search::{Cost, SearchProblem};

/// Cheapest cost from the start to any goal, or `None` if no goal is
/// reachable.
///
/// Requires non-negative step costs: with them some optimal path is simple,
/// and a partial path costing at least the best known total is pruned.
#[must_use]
pub fn brute_force_min_cost<P: SearchProblem + ?Sized>(problem: &P) -> Option<Cost> {
    let start = problem.start();
    let mut on_path = HashSet::from([start.clone()]);
    let mut best = None;
    extend(problem, &start, 0, &mut on_path, &mut best);
    best
}

fn extend<P: SearchProblem + ?Sized>(
    problem: &P,
    state: &P::State,
    g: Cost,
    on_path: &mut HashSet<P::State>,
    best: &mut Option<Cost>,
) {
    if best.is_some_and(|b| g >= b) {
        return;
    }
    if problem.is_goal(state) {
        *best = Some(g);
        return;
    }
    for successor in problem.successors(state) {
        if on_path.contains(&successor.state) {
            continue;
        }
        let Some(next_g) = g.checked_add(successor.cost) else {
            continue;
        };
        on_path.insert(successor.state.clone());
        extend(problem, &successor.state, next_g, on_path, best);
        on_path.remove(&successor.state);
    }
}

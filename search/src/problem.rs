//! The state-space contract a caller implements.

use std::fmt::Debug;
use std::hash::Hash;

/// Path and step cost. Integer so that frontier ordering is total and
/// results are bit-reproducible.
pub type Cost = i64;

/// One transition out of a state: `(successor state, action, step cost)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    #[must_use]
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// A state space the search driver can traverse.
///
/// # Contract
///
/// - `start` is side-effect free and returns the same state on every call.
/// - `successors` must be deterministic: same state, same successors in the
///   same order. Order decides depth-first and breadth-first tie-breaking.
/// - Step costs should be non-negative. Negative costs are accepted, but
///   uniform-cost and A* optimality no longer hold.
///
/// Violations are not detected by the engine; they make results
/// non-reproducible. Panics raised here propagate to the caller unmodified.
pub trait SearchProblem {
    /// Opaque world configuration. Graph search keys its closed set on it.
    type State: Clone + Eq + Hash + Debug;
    /// Opaque transition label, returned in the output plan.
    type Action: Clone + PartialEq + Debug;

    /// The initial state.
    fn start(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`, in a deterministic order.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` from [`SearchProblem::start`].
    ///
    /// Returns `None` if some action is not applicable along the way or the
    /// sum overflows [`Cost`]. The driver never calls this; it accumulates
    /// cost incrementally.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Cost> {
        crate::replay::replay(self, actions).ok().map(|r| r.cost)
    }
}

/// The same state space as `problem`, entered from a different start state.
///
/// Used to compute true cost-to-go from arbitrary states (heuristic
/// validation, maze distances).
#[derive(Debug, Clone)]
pub struct RootedAt<'a, P: SearchProblem + ?Sized> {
    problem: &'a P,
    start: P::State,
}

impl<'a, P: SearchProblem + ?Sized> RootedAt<'a, P> {
    #[must_use]
    pub fn new(problem: &'a P, start: P::State) -> Self {
        Self { problem, start }
    }
}

impl<P: SearchProblem + ?Sized> SearchProblem for RootedAt<'_, P> {
    type State = P::State;
    type Action = P::Action;

    fn start(&self) -> Self::State {
        self.start.clone()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.problem.is_goal(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>> {
        self.problem.successors(state)
    }
}

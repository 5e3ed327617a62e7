//! Heuristic estimates for informed search.
//!
//! A heuristic maps a state to a non-negative estimate of the remaining cost
//! to the nearest goal, and must be 0 at every goal. The driver relies on two
//! properties it never checks at runtime:
//!
//! - **Admissible**: `h(s) <= true cost from s to the nearest goal`.
//!   Tree-search A* is optimal under an admissible heuristic.
//! - **Consistent**: `h(s) <= c + h(s')` for every edge `s -> s'` of cost `c`.
//!   Graph-search A* is optimal under a consistent heuristic: every state is
//!   popped for the first time with its optimal path cost.
//!
//! A breach gives silently suboptimal plans, not errors. The checks in
//! [`crate::validate`] find breaches on finite state sets.

use crate::problem::Cost;

/// A cost-to-go estimate.
///
/// Implemented for every `Fn(&S) -> Cost`, so closures can be passed
/// directly.
pub trait Heuristic<S: ?Sized> {
    fn estimate(&self, state: &S) -> Cost;
}

impl<S: ?Sized, F> Heuristic<S> for F
where
    F: Fn(&S) -> Cost,
{
    fn estimate(&self, state: &S) -> Cost {
        self(state)
    }
}

/// `h ≡ 0`. Trivially consistent; A* with it behaves as uniform-cost search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<S: ?Sized> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> Cost {
        0
    }
}

/// Pointwise maximum of two heuristics.
///
/// If both are admissible (resp. consistent) so is the maximum, and it
/// dominates both.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxHeuristic<A, B> {
    pub first: A,
    pub second: B,
}

impl<S: ?Sized, A, B> Heuristic<S> for MaxHeuristic<A, B>
where
    A: Heuristic<S>,
    B: Heuristic<S>,
{
    fn estimate(&self, state: &S) -> Cost {
        self.first.estimate(state).max(self.second.estimate(state))
    }
}

/// Combine two heuristics into their pointwise maximum.
#[must_use]
pub fn max_of<A, B>(first: A, second: B) -> MaxHeuristic<A, B> {
    MaxHeuristic { first, second }
}

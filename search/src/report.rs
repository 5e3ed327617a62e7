//! Termination reasons, counters, and the optional expansion log.

use crate::problem::Cost;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was reached; the result carries a plan.
    GoalReached,
    /// The frontier emptied with no depth cutoffs: no goal is reachable.
    FrontierExhausted,
    /// `max_expansions` was hit.
    ExpansionBudgetExceeded,
    /// The wall-clock deadline passed.
    DeadlineExceeded,
    /// The frontier emptied, but successors were cut by `max_depth`.
    DepthBudgetExceeded,
}

impl TerminationReason {
    /// Collapse into the three caller-facing outcomes.
    #[must_use]
    pub fn outcome(self) -> Outcome {
        match self {
            Self::GoalReached => Outcome::Solved,
            Self::FrontierExhausted => Outcome::Unsolvable,
            Self::ExpansionBudgetExceeded | Self::DeadlineExceeded | Self::DepthBudgetExceeded => {
                Outcome::Aborted
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::DeadlineExceeded => "deadline_exceeded",
            Self::DepthBudgetExceeded => "depth_budget_exceeded",
        }
    }
}

/// Caller-facing outcome tag.
///
/// `Unsolvable` is proven: every reachable state was examined. `Aborted`
/// means a budget stopped the search first and a solution may still exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Unsolvable,
    Aborted,
}

impl Outcome {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::Unsolvable => "unsolvable",
            Self::Aborted => "aborted",
        }
    }
}

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Child nodes created and pushed.
    pub generated: u64,
    /// Successors skipped because their state was already closed.
    pub duplicates_suppressed: u64,
    /// Popped nodes discarded because their state was already closed.
    pub stale_pops: u64,
    /// Successors skipped by `max_depth`.
    pub depth_cutoffs: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStats {
    /// Add another run's counters into these (high water takes the max).
    pub fn absorb(&mut self, other: &SearchStats) {
        self.expansions += other.expansions;
        self.generated += other.generated;
        self.duplicates_suppressed += other.duplicates_suppressed;
        self.stale_pops += other.stale_pops;
        self.depth_cutoffs += other.depth_cutoffs;
        self.frontier_high_water = self.frontier_high_water.max(other.frontier_high_water);
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_cutoffs": self.depth_cutoffs,
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "generated": self.generated,
            "stale_pops": self.stale_pops,
        })
    }
}

/// One expansion, recorded when `SearchPolicy::record_expansions` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionRecord<S> {
    /// Position in the expansion sequence (0-based, contiguous).
    pub expansion_order: u64,
    pub state: S,
    pub depth: u32,
    pub g_cost: Cost,
    pub h_cost: Cost,
    /// Frontier priority the node was popped with (0 for stack and FIFO).
    pub priority: Cost,
}

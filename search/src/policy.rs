//! Search policy: mode, budgets, and goal-test timing.

use std::time::Duration;

use crate::error::SearchError;
use crate::strategy::Strategy;

/// Per-invocation search configuration.
///
/// The default is graph search with no budgets, goal testing at pop time, and
/// no expansion log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Graph search (closed set) or tree search.
    pub mode: SearchMode,
    /// Hard cap on node expansions. `None` is unlimited.
    pub max_expansions: Option<u64>,
    /// Successors deeper than this are not generated. `None` is unlimited.
    pub max_depth: Option<u32>,
    /// Wall-clock budget measured from the start of the call.
    pub deadline: Option<Duration>,
    /// When goal states are recognized.
    pub goal_test: GoalTest,
    /// Keep a per-expansion log in the result.
    pub record_expansions: bool,
}

impl SearchPolicy {
    /// Graph search, otherwise default.
    #[must_use]
    pub fn graph() -> Self {
        Self::default()
    }

    /// Tree search (no closed set), otherwise default.
    #[must_use]
    pub fn tree() -> Self {
        Self {
            mode: SearchMode::Tree,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_goal_test(mut self, goal_test: GoalTest) -> Self {
        self.goal_test = goal_test;
        self
    }

    #[must_use]
    pub fn recording_expansions(mut self) -> Self {
        self.record_expansions = true;
        self
    }

    /// Check that this policy can be honored by `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if generation-time goal testing
    /// is requested for any strategy other than breadth-first. For
    /// cost-sensitive strategies it would return a goal before a cheaper
    /// path to it is popped.
    pub fn validate(&self, strategy: Strategy) -> Result<(), SearchError> {
        if self.goal_test == GoalTest::OnGeneration && strategy != Strategy::BreadthFirst {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "GoalTest::OnGeneration is only supported for bfs, not {strategy}"
                ),
            });
        }
        Ok(())
    }

    /// Canonical JSON projection (sorted keys, integers only).
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "deadline_ms": self.deadline.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            "goal_test": self.goal_test.as_str(),
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
            "mode": self.mode.as_str(),
            "record_expansions": self.record_expansions,
        })
    }
}

/// Whether already-expanded states are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Closed set keyed by state: each state is expanded at most once.
    #[default]
    Graph,
    /// No deduplication. May not terminate on cyclic state spaces without a
    /// budget or depth limit.
    Tree,
}

impl SearchMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Tree => "tree",
        }
    }
}

/// When the driver tests for goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalTest {
    /// When a node is popped. Correct for every strategy.
    #[default]
    OnExpansion,
    /// When a successor is generated. Breadth-first only; saves one frontier
    /// layer on unit-cost spaces.
    OnGeneration,
}

impl GoalTest {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnExpansion => "on_expansion",
            Self::OnGeneration => "on_generation",
        }
    }
}

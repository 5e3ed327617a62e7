//! Strategy selection: every strategy is a frontier discipline.
//!
//! ```text
//! DepthFirst   → Stack
//! BreadthFirst → Fifo
//! UniformCost  → Priority(g)
//! Greedy       → Priority(h)
//! AStar        → Priority(g + h)
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::problem::Cost;

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    Greedy,
    AStar,
}

impl Strategy {
    /// All strategies, uninformed first.
    pub const ALL: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// The frontier discipline this strategy reduces to.
    #[must_use]
    pub fn discipline(self) -> Discipline {
        match self {
            Self::DepthFirst => Discipline::Stack,
            Self::BreadthFirst => Discipline::Fifo,
            Self::UniformCost => Discipline::Priority(PriorityFn::PathCost),
            Self::Greedy => Discipline::Priority(PriorityFn::Heuristic),
            Self::AStar => Discipline::Priority(PriorityFn::PathCostPlusHeuristic),
        }
    }

    /// Whether the strategy consults the heuristic.
    #[must_use]
    pub fn is_informed(self) -> bool {
        self.discipline().uses_heuristic()
    }

    /// Short stable name (`dfs`, `bfs`, `ucs`, `greedy`, `astar`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy: {name:?}")]
pub struct ParseStrategyError {
    pub name: String,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" | "depth_first" => Ok(Self::DepthFirst),
            "bfs" | "breadth_first" => Ok(Self::BreadthFirst),
            "ucs" | "uniform_cost" => Ok(Self::UniformCost),
            "greedy" => Ok(Self::Greedy),
            "astar" | "a_star" => Ok(Self::AStar),
            other => Err(ParseStrategyError {
                name: other.to_string(),
            }),
        }
    }
}

/// Frontier ordering discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// LIFO: the most recently pushed node pops first.
    Stack,
    /// FIFO: nodes pop in push order.
    Fifo,
    /// Lowest priority pops first; ties pop in push order.
    Priority(PriorityFn),
}

impl Discipline {
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(
            self,
            Self::Priority(PriorityFn::Heuristic | PriorityFn::PathCostPlusHeuristic)
        )
    }

    /// Priority for a node with path cost `g` and estimate `h`.
    ///
    /// Unweighted disciplines ignore priorities; they return 0.
    #[must_use]
    pub fn priority(self, g: Cost, h: Cost) -> Cost {
        match self {
            Self::Stack | Self::Fifo => 0,
            Self::Priority(f) => f.priority(g, h),
        }
    }
}

/// What a priority frontier orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFn {
    /// `g`: uniform-cost.
    PathCost,
    /// `h`: greedy best-first.
    Heuristic,
    /// `g + h`: A*.
    PathCostPlusHeuristic,
}

impl PriorityFn {
    #[must_use]
    pub fn priority(self, g: Cost, h: Cost) -> Cost {
        match self {
            Self::PathCost => g,
            Self::Heuristic => h,
            Self::PathCostPlusHeuristic => g.saturating_add(h),
        }
    }
}

//! Wayfind Search: deterministic state-space search over caller-defined problems.
//!
//! One driver runs depth-first, breadth-first, uniform-cost, greedy
//! best-first and A* search. A strategy only picks the frontier discipline;
//! the node arena, closed set, budgets and goal testing are shared.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_search  ←  wayfind_harness
//! (driver, frontier,   (worlds, runner,
//!  nodes, heuristics)   run records)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`]: the contract a caller implements
//! - [`Strategy`]: which frontier discipline to search with
//! - [`SearchPolicy`]: graph/tree mode, budgets and goal-test timing
//! - [`Heuristic`]: cost-to-go estimates for greedy and A*
//! - [`SearchResult`]: termination reason, plan and counters
//!
//! # Determinism
//!
//! For a fixed problem, strategy, heuristic and policy (without a deadline),
//! the plan, the expansion order and every counter are identical across runs.
//! Successors are pushed in the order the problem returns them and priority
//! ties pop oldest first.

#![forbid(unsafe_code)]

pub mod deepening;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod problem;
pub mod replay;
pub mod report;
pub mod search;
pub mod strategy;
pub mod validate;

pub use deepening::iterative_deepening_search;
pub use error::SearchError;
pub use frontier::{Frontier, PriorityQueue};
pub use heuristic::{max_of, Heuristic, MaxHeuristic, ZeroHeuristic};
pub use node::{FrontierKey, NodeArena, NodeId, Plan, SearchNode};
pub use policy::{GoalTest, SearchMode, SearchPolicy};
pub use problem::{Cost, RootedAt, SearchProblem, Successor};
pub use replay::{replay, verify_plan, Replay, ReplayError};
pub use report::{ExpansionRecord, Outcome, SearchStats, TerminationReason};
pub use search::{
    a_star_search, breadth_first_search, depth_first_search, greedy_search, search,
    uniform_cost_search, SearchResult,
};
pub use strategy::{Discipline, ParseStrategyError, PriorityFn, Strategy};

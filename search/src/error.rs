//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures and the contract violations the
//! engine can detect. Exhaustion and budget aborts are not errors: they are
//! reported through [`crate::report::TerminationReason`] inside a normal
//! [`crate::search::SearchResult`].

use thiserror::Error;

use crate::problem::Cost;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy selects an option the chosen strategy cannot honor.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// Accumulating a step cost overflowed the path-cost type.
    #[error("path cost overflow at depth {depth}: {g_cost} + {step_cost}")]
    CostOverflow {
        depth: u32,
        g_cost: Cost,
        step_cost: Cost,
    },
}

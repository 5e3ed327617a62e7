//! World contract: what the runner needs beyond [`SearchProblem`].
//!
//! A world supplies its state space, an identifier, an optional heuristic
//! and stable action labels. Worlds do NOT run searches, verify plans or
//! hash records; those are runner concerns.

use wayfind_search::{Cost, SearchProblem};

/// A search problem the harness runner can execute and record.
pub trait HarnessWorld: SearchProblem {
    /// Stable identifier recorded in every run record (e.g. `"grid_maze"`).
    fn world_id(&self) -> &str;

    /// Heuristic used by greedy and A* runs. Defaults to 0.
    fn estimate(&self, _state: &Self::State) -> Cost {
        0
    }

    /// Stable text form of an action for run records.
    fn action_label(&self, action: &Self::Action) -> String;
}

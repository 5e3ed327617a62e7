//! Replaying a plan against the problem's own successor function.

use thiserror::Error;

use crate::problem::{Cost, SearchProblem};

/// Why a plan could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// No successor of the current state carries the plan's next action.
    #[error("action {action} at step {step} is not applicable")]
    InapplicableAction { step: usize, action: String },
    /// Every action applied, but the final state is not a goal.
    #[error("plan of {steps} actions does not end in a goal state")]
    GoalNotReached { steps: usize },
    /// Adding the step cost at `step` overflowed the path-cost type.
    #[error("path cost overflow at step {step}: {cost} + {step_cost}")]
    CostOverflow {
        step: usize,
        cost: Cost,
        step_cost: Cost,
    },
}

/// The states visited while replaying a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay<S> {
    /// Start state followed by the state after each action.
    pub states: Vec<S>,
    /// Sum of step costs along the plan.
    pub cost: Cost,
}

impl<S> Replay<S> {
    /// The state reached after the last action.
    #[must_use]
    pub fn final_state(&self) -> Option<&S> {
        self.states.last()
    }
}

/// Apply `actions` from `problem.start()`.
///
/// At each step the first successor whose action equals the plan's action is
/// taken.
///
/// # Errors
///
/// Returns [`ReplayError::InapplicableAction`] at the first action no
/// successor carries, or [`ReplayError::CostOverflow`] if the summed cost
/// leaves the range of [`Cost`].
pub fn replay<P: SearchProblem + ?Sized>(
    problem: &P,
    actions: &[P::Action],
) -> Result<Replay<P::State>, ReplayError> {
    let mut current = problem.start();
    let mut states = Vec::with_capacity(actions.len() + 1);
    let mut cost: Cost = 0;

    for (step, action) in actions.iter().enumerate() {
        let next = problem
            .successors(&current)
            .into_iter()
            .find(|s| &s.action == action)
            .ok_or_else(|| ReplayError::InapplicableAction {
                step,
                action: format!("{action:?}"),
            })?;
        cost = cost
            .checked_add(next.cost)
            .ok_or(ReplayError::CostOverflow {
                step,
                cost,
                step_cost: next.cost,
            })?;
        states.push(std::mem::replace(&mut current, next.state));
    }
    states.push(current);

    Ok(Replay { states, cost })
}

/// [`replay`], then require the final state to be a goal.
///
/// # Errors
///
/// Returns [`ReplayError::InapplicableAction`] as [`replay`] does, or
/// [`ReplayError::GoalNotReached`] if the plan ends outside the goal set.
pub fn verify_plan<P: SearchProblem + ?Sized>(
    problem: &P,
    actions: &[P::Action],
) -> Result<Replay<P::State>, ReplayError> {
    let replayed = replay(problem, actions)?;
    match replayed.final_state() {
        Some(state) if problem.is_goal(state) => Ok(replayed),
        _ => Err(ReplayError::GoalNotReached {
            steps: actions.len(),
        }),
    }
}

//! Exhaustion and aborts: an unreachable goal is reported as Unsolvable by
//! every strategy, while any budget stop is Aborted and never claims
//! unsolvability.

use std::time::Duration;

use lock_tests::fixtures::{disconnected, loopy_maze};
use wayfind_harness::runner::run_all_strategies;
use wayfind_harness::worlds::graph_world::GraphWorld;
use wayfind_search::{
    iterative_deepening_search, search, uniform_cost_search, Outcome, SearchPolicy,
    TerminationReason, Strategy, ZeroHeuristic,
};

#[test]
fn every_strategy_reports_unsolvable_on_disconnected_graph() {
    let world = disconnected();
    for strategy in Strategy::ALL {
        let result = search(&world, strategy, &ZeroHeuristic, &SearchPolicy::default()).unwrap();
        assert_eq!(result.outcome(), Outcome::Unsolvable, "{strategy}");
        assert_eq!(
            result.termination,
            TerminationReason::FrontierExhausted,
            "{strategy}"
        );
        assert!(result.plan.is_none(), "{strategy}");
        // S, A and D are all expanded before the frontier empties.
        assert_eq!(result.stats.expansions, 3, "{strategy}");
    }
}

#[test]
fn run_records_for_unsolvable_world_have_no_plan() {
    let records = run_all_strategies(&disconnected(), &SearchPolicy::default()).unwrap();
    for record in records {
        assert_eq!(record.termination, TerminationReason::FrontierExhausted);
        assert_eq!(record.actions, None);
        assert_eq!(record.cost, None);
    }
}

#[test]
fn tree_search_on_a_cycle_is_aborted_not_unsolvable() {
    let world = disconnected();
    let policy = SearchPolicy::tree().with_max_expansions(50);
    for strategy in Strategy::ALL {
        let result = search(&world, strategy, &ZeroHeuristic, &policy).unwrap();
        assert_eq!(
            result.termination,
            TerminationReason::ExpansionBudgetExceeded,
            "{strategy}"
        );
        assert_eq!(result.outcome(), Outcome::Aborted, "{strategy}");
        assert_eq!(result.stats.expansions, 50, "{strategy}");
    }
}

#[test]
fn depth_limited_search_cannot_prove_unsolvable_on_a_cycle() {
    let world = disconnected();
    let policy = SearchPolicy::tree().with_max_depth(4);
    let result = search(&world, Strategy::DepthFirst, &ZeroHeuristic, &policy).unwrap();
    assert_eq!(result.termination, TerminationReason::DepthBudgetExceeded);
    assert_eq!(result.outcome(), Outcome::Aborted);

    let ids = iterative_deepening_search(&world, &SearchPolicy::default().with_max_depth(6))
        .unwrap();
    assert_eq!(ids.termination, TerminationReason::DepthBudgetExceeded);
    assert!(ids.plan.is_none());
}

#[test]
fn depth_limit_in_graph_mode_finds_plans_within_the_limit() {
    // DFS first reaches B through X, one level too deep to generate G.
    let world = GraphWorld::new("S")
        .arc("S", "B", 1)
        .arc("S", "X", 1)
        .arc("X", "B", 1)
        .arc("B", "G", 1)
        .goal("G");
    let expected = ["B".to_owned(), "G".to_owned()];

    for strategy in Strategy::ALL {
        let graph = SearchPolicy::graph().with_max_depth(2);
        let result = search(&world, strategy, &ZeroHeuristic, &graph).unwrap();
        assert_eq!(result.termination, TerminationReason::GoalReached, "{strategy}");
        assert_eq!(result.actions(), Some(&expected[..]), "{strategy}");

        let tree = SearchPolicy::tree().with_max_depth(2);
        let result = search(&world, strategy, &ZeroHeuristic, &tree).unwrap();
        assert_eq!(result.actions(), Some(&expected[..]), "{strategy}");
    }

    let too_shallow = SearchPolicy::graph().with_max_depth(1);
    let result = search(&world, Strategy::DepthFirst, &ZeroHeuristic, &too_shallow).unwrap();
    assert_eq!(result.termination, TerminationReason::DepthBudgetExceeded);
}

#[test]
fn expansion_budget_aborts_a_solvable_search() {
    let maze = loopy_maze();
    let unlimited = uniform_cost_search(&maze).unwrap();
    assert!(unlimited.is_goal_reached());
    let needed = unlimited.stats.expansions;

    let short = SearchPolicy::default().with_max_expansions(needed - 1);
    let aborted = search(&maze, Strategy::UniformCost, &ZeroHeuristic, &short).unwrap();
    assert_eq!(aborted.termination, TerminationReason::ExpansionBudgetExceeded);
    assert!(aborted.plan.is_none());

    let exact = SearchPolicy::default().with_max_expansions(needed);
    let solved = search(&maze, Strategy::UniformCost, &ZeroHeuristic, &exact).unwrap();
    assert_eq!(solved.cost(), unlimited.cost());
}

#[test]
fn zero_deadline_aborts_before_the_first_expansion() {
    let maze = loopy_maze();
    let policy = SearchPolicy::default().with_deadline(Duration::ZERO);
    let result = search(&maze, Strategy::AStar, &ZeroHeuristic, &policy).unwrap();
    assert_eq!(result.termination, TerminationReason::DeadlineExceeded);
    assert_eq!(result.outcome(), Outcome::Aborted);
    assert_eq!(result.stats.expansions, 0);
}

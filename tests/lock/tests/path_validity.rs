//! Every returned plan replays from `start()` to a goal at the reported cost.

use lock_tests::fixtures::{goals_at_depths_2_4_5, loopy_maze, two_route_scenario};
use wayfind_harness::contract::HarnessWorld;
use wayfind_harness::worlds::grid_maze::{Direction, Position};
use wayfind_search::{
    replay, search, verify_plan, GoalTest, ReplayError, SearchPolicy, SearchProblem, Strategy,
    ZeroHeuristic,
};

fn assert_valid_plans<W: HarnessWorld>(world: &W, policy: &SearchPolicy) {
    let h = |s: &W::State| world.estimate(s);
    for strategy in Strategy::ALL {
        let result = search(world, strategy, &h, policy).unwrap();
        let actions = result.actions().unwrap();
        let replayed = verify_plan(world, actions).unwrap();
        assert_eq!(Some(replayed.cost), result.cost(), "{strategy}");
        assert_eq!(world.cost_of_actions(actions), result.cost(), "{strategy}");
        assert_eq!(replayed.states.len(), actions.len() + 1, "{strategy}");
    }
}

#[test]
fn graph_search_plans_replay() {
    assert_valid_plans(&two_route_scenario(), &SearchPolicy::default());
    assert_valid_plans(&goals_at_depths_2_4_5(), &SearchPolicy::default());
    assert_valid_plans(&loopy_maze(), &SearchPolicy::default());
}

#[test]
fn tree_search_plans_replay_on_acyclic_worlds() {
    assert_valid_plans(&two_route_scenario(), &SearchPolicy::tree());
    assert_valid_plans(&goals_at_depths_2_4_5(), &SearchPolicy::tree());
}

#[test]
fn generation_time_bfs_plan_replays() {
    let maze = loopy_maze();
    let policy = SearchPolicy::default().with_goal_test(GoalTest::OnGeneration);
    let result = search(&maze, Strategy::BreadthFirst, &ZeroHeuristic, &policy).unwrap();
    assert!(verify_plan(&maze, result.actions().unwrap()).is_ok());
}

#[test]
fn corrupted_plan_is_rejected() {
    let maze = loopy_maze();
    let mut actions = search(
        &maze,
        Strategy::AStar,
        &|s: &Position| maze.estimate(s),
        &SearchPolicy::default(),
    )
    .unwrap()
    .plan
    .unwrap()
    .actions;

    // The start (1, 1) has a wall to the north.
    let mut walled = vec![Direction::North];
    walled.extend_from_slice(&actions);
    assert!(matches!(
        replay(&maze, &walled),
        Err(ReplayError::InapplicableAction { step: 0, .. })
    ));

    actions.pop();
    let steps = actions.len();
    assert_eq!(
        verify_plan(&maze, &actions).unwrap_err(),
        ReplayError::GoalNotReached { steps }
    );
    assert!(maze.cost_of_actions(&actions).is_some());
}

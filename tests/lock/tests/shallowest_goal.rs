//! Breadth-first search returns the shallowest goal: goals at depths
//! {2, 4, 5} on a unit-cost graph give a 2-action plan.

use lock_tests::fixtures::goals_at_depths_2_4_5;
use wayfind_search::{
    breadth_first_search, iterative_deepening_search, search, GoalTest, SearchPolicy, Strategy,
    ZeroHeuristic,
};

#[test]
fn bfs_returns_depth_2_plan() {
    let world = goals_at_depths_2_4_5();
    let result = breadth_first_search(&world).unwrap();
    assert_eq!(result.actions(), Some(&["z1".to_owned(), "z2".to_owned()][..]));
    assert_eq!(result.plan.as_ref().map(|p| p.len()), Some(2));
}

#[test]
fn bfs_tree_search_agrees() {
    let world = goals_at_depths_2_4_5();
    let result = search(
        &world,
        Strategy::BreadthFirst,
        &ZeroHeuristic,
        &SearchPolicy::tree(),
    )
    .unwrap();
    assert_eq!(result.plan.map(|p| p.len()), Some(2));
}

#[test]
fn generation_time_goal_test_finds_same_plan_with_fewer_expansions() {
    let world = goals_at_depths_2_4_5();
    let on_pop = breadth_first_search(&world).unwrap();
    let on_generation = search(
        &world,
        Strategy::BreadthFirst,
        &ZeroHeuristic,
        &SearchPolicy::default().with_goal_test(GoalTest::OnGeneration),
    )
    .unwrap();
    assert_eq!(on_generation.actions(), on_pop.actions());
    // Pop-time: S, x1, y1, z1, x2, y2 before z2 pops. Generation-time: z2 is
    // seen while expanding z1.
    assert_eq!(on_pop.stats.expansions, 6);
    assert_eq!(on_generation.stats.expansions, 4);
}

#[test]
fn iterative_deepening_also_returns_depth_2_plan() {
    let world = goals_at_depths_2_4_5();
    let result = iterative_deepening_search(&world, &SearchPolicy::default()).unwrap();
    assert_eq!(result.plan.map(|p| p.len()), Some(2));
}

#[test]
fn uniform_cost_on_unit_costs_is_also_shallowest() {
    let world = goals_at_depths_2_4_5();
    let result = search(
        &world,
        Strategy::UniformCost,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(result.cost(), Some(2));
}

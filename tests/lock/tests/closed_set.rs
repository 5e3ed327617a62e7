//! Graph search expands each state at most once; tree search does not.

use std::collections::HashSet;

use lock_tests::fixtures::loopy_maze;
use wayfind_harness::contract::HarnessWorld;
use wayfind_harness::worlds::grid_maze::Position;
use wayfind_search::{search, SearchPolicy, Strategy, ZeroHeuristic};

#[test]
fn graph_search_expansions_bounded_by_open_cells() {
    let maze = loopy_maze();
    let cells = maze.open_cells().len() as u64;
    let h = |s: &Position| maze.estimate(s);
    let policy = SearchPolicy::default().recording_expansions();

    for strategy in Strategy::ALL {
        let result = search(&maze, strategy, &h, &policy).unwrap();
        assert!(result.is_goal_reached(), "{strategy}");
        assert!(result.stats.expansions <= cells, "{strategy}");

        let mut seen = HashSet::new();
        for record in &result.expansions {
            assert!(
                seen.insert(record.state),
                "{strategy} expanded {:?} twice",
                record.state
            );
        }
    }
}

#[test]
fn expansion_log_is_contiguous() {
    let maze = loopy_maze();
    let policy = SearchPolicy::default().recording_expansions();
    let result = search(&maze, Strategy::UniformCost, &ZeroHeuristic, &policy).unwrap();
    for (i, record) in result.expansions.iter().enumerate() {
        assert_eq!(record.expansion_order, i as u64);
    }
    assert_eq!(result.expansions[0].state, maze.start_position());
    assert_eq!(result.expansions[0].g_cost, 0);
}

#[test]
fn tree_search_re_expands_states() {
    let maze = loopy_maze();
    let policy = SearchPolicy::tree()
        .with_max_expansions(200)
        .recording_expansions();
    let result = search(&maze, Strategy::BreadthFirst, &ZeroHeuristic, &policy).unwrap();
    let distinct: HashSet<Position> = result.expansions.iter().map(|r| r.state).collect();
    assert!(distinct.len() < result.expansions.len());
}

#[test]
fn duplicates_and_stale_pops_are_counted() {
    let maze = loopy_maze();
    let result = search(
        &maze,
        Strategy::UniformCost,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .unwrap();
    // Every expansion after the first reaches its parent again, which is closed.
    assert!(result.stats.duplicates_suppressed >= result.stats.expansions - 1);
    assert!(result.stats.generated >= result.stats.expansions);
    assert!(result.stats.frontier_high_water >= 1);
}

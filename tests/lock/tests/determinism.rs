//! In-process determinism: repeated runs give identical plans, counters,
//! expansion logs and run-record digests.

use lock_tests::fixtures::{loopy_maze, two_route_scenario};
use wayfind_harness::contract::HarnessWorld;
use wayfind_harness::runner::run_all_strategies;
use wayfind_harness::worlds::grid_maze::Position;
use wayfind_search::{search, SearchPolicy, Strategy};

#[test]
fn maze_search_is_identical_across_ten_runs() {
    let maze = loopy_maze();
    let h = |s: &Position| maze.estimate(s);
    let policy = SearchPolicy::default().recording_expansions();

    for strategy in Strategy::ALL {
        let first = search(&maze, strategy, &h, &policy).unwrap();
        for _ in 1..10 {
            let again = search(&maze, strategy, &h, &policy).unwrap();
            assert_eq!(again.termination, first.termination, "{strategy}");
            assert_eq!(again.plan, first.plan, "{strategy}");
            assert_eq!(again.stats, first.stats, "{strategy}");
            assert_eq!(again.expansions, first.expansions, "{strategy}");
        }
    }
}

#[test]
fn run_record_digests_are_identical_across_ten_runs() {
    let world = two_route_scenario();
    let baseline: Vec<_> = run_all_strategies(&world, &SearchPolicy::default())
        .unwrap()
        .iter()
        .map(|r| r.content_hash().unwrap())
        .collect();
    for _ in 1..10 {
        let again: Vec<_> = run_all_strategies(&world, &SearchPolicy::default())
            .unwrap()
            .iter()
            .map(|r| r.content_hash().unwrap())
            .collect();
        assert_eq!(again, baseline);
    }
}

#[test]
fn digests_differ_between_strategies_that_expand_differently() {
    let maze = loopy_maze();
    let records = run_all_strategies(&maze, &SearchPolicy::default()).unwrap();
    let bfs = &records[1];
    let astar = &records[4];
    assert_eq!(bfs.strategy, Strategy::BreadthFirst);
    assert_eq!(astar.strategy, Strategy::AStar);
    assert_ne!(bfs.content_hash().unwrap(), astar.content_hash().unwrap());
}

//! Binary that runs every strategy over the fixture worlds and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `plan_fixture`
//!
//! Output: `<world>.<strategy>.<field>=<value>` lines, one block per run.

use lock_tests::fixtures::{loopy_maze, two_route_scenario};
use wayfind_harness::contract::HarnessWorld;
use wayfind_harness::runner::{run_all_strategies, RunRecord};
use wayfind_search::SearchPolicy;

fn print_records(records: &[RunRecord]) {
    for record in records {
        let prefix = format!("{}.{}", record.world_id, record.strategy);
        let hash = record.content_hash().expect("run record hashes");
        println!("{prefix}.record_digest={hash}");
        println!("{prefix}.policy_digest={}", record.policy_digest);
        println!("{prefix}.termination={}", record.termination.as_str());
        match (&record.actions, record.cost) {
            (Some(actions), Some(cost)) => {
                println!("{prefix}.actions={}", actions.join(","));
                println!("{prefix}.cost={cost}");
            }
            _ => println!("{prefix}.actions=none"),
        }
        println!("{prefix}.expansions={}", record.stats.expansions);
        println!("{prefix}.generated={}", record.stats.generated);
    }
}

fn run<W: HarnessWorld>(world: &W) -> Vec<RunRecord> {
    run_all_strategies(world, &SearchPolicy::default()).expect("fixture runs succeed")
}

fn main() {
    print_records(&run(&two_route_scenario()));
    print_records(&run(&loopy_maze()));
}

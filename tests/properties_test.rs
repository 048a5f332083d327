/*!
 * Property Tests
 * Loop invariants checked over randomized batches
 */

use dqrr_sim::{Scheduler, SimulationConfig};
use proptest::collection::vec;
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = SimulationConfig> {
    (1u64..=10, vec((1u64..=20, 0u64..=30), 1..8)).prop_map(|(quantum, specs)| {
        specs
            .iter()
            .fold(SimulationConfig::new(quantum), |config, &(burst, arrival)| {
                config.with_process(burst, arrival)
            })
    })
}

proptest! {
    #[test]
    fn prop_every_process_completes_with_consistent_metrics(config in arb_config()) {
        let mut scheduler = Scheduler::new(config).expect("valid configuration");
        scheduler.run();

        for record in scheduler.records() {
            prop_assert_eq!(record.remaining_time(), 0);
            prop_assert!(record.scheduled_count() >= 1);

            let start = record.start_time().expect("dispatched at least once");
            prop_assert!(start >= record.arrival_time());

            // wait = turnaround - burst, both non-negative by construction
            prop_assert_eq!(
                record.turnaround_time(),
                record.wait_time() + record.burst_time()
            );
            prop_assert!(record.arrival_time() + record.turnaround_time() <= scheduler.clock());
        }
    }

    #[test]
    fn prop_identical_inputs_yield_identical_outcomes(config in arb_config()) {
        let mut first = Scheduler::new(config.clone()).expect("valid configuration");
        let mut second = Scheduler::new(config).expect("valid configuration");
        first.run();
        second.run();

        prop_assert_eq!(first.clock(), second.clock());
        prop_assert_eq!(first.records(), second.records());
    }
}

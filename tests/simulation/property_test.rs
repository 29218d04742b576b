/*!
 * Property Tests
 * Trace invariants over randomly generated catalogs
 */

use proptest::prelude::*;
use rr_sim::{
    EngineBuilder, ProcessSpec, Quantum, SchedulingEngine, SimulationMode, Transition,
};

fn process_spec() -> impl Strategy<Value = (u64, bool, bool, bool)> {
    (1u64..80, any::<bool>(), any::<bool>(), any::<bool>())
}

fn suspension_engine(quantum: u64, specs: &[(u64, bool, bool, bool)]) -> SchedulingEngine {
    let mut engine = EngineBuilder::new().with_quantum(quantum).build().unwrap();
    for (i, &(time, blocked, suspended_ready, suspended_blocked)) in specs.iter().enumerate() {
        let mut spec = ProcessSpec::new(format!("P{}", i), time);
        if blocked {
            spec = spec.blocked();
            if suspended_blocked {
                spec = spec.suspended_blocked();
            }
        }
        if suspended_ready {
            spec = spec.suspended_ready();
        }
        engine.add_process(spec).unwrap();
    }
    engine
}

proptest! {
    #[test]
    fn prop_every_process_finishes_once(
        quantum in 1u64..20,
        specs in prop::collection::vec(process_spec(), 1..12),
    ) {
        let mut engine = suspension_engine(quantum, &specs);
        let summary = engine.run().unwrap();

        prop_assert_eq!(summary.finished, specs.len());
        for i in 0..specs.len() {
            let name = format!("P{}", i);
            let finished = engine
                .trace()
                .for_process(&name)
                .filter(|e| e.transition() == Transition::Finished)
                .count();
            prop_assert_eq!(finished, 1);
        }
    }

    #[test]
    fn prop_cycles_match_quantum_division(
        quantum in 1u64..20,
        specs in prop::collection::vec(process_spec(), 1..12),
    ) {
        let mut engine = suspension_engine(quantum, &specs);
        engine.run().unwrap();
        let q = Quantum::new(quantum).unwrap();

        for (i, &(time, ..)) in specs.iter().enumerate() {
            let name = format!("P{}", i);
            let running: Vec<_> = engine
                .trace()
                .for_process(&name)
                .filter(|e| e.transition() == Transition::Running)
                .collect();

            prop_assert_eq!(running.len() as u64, q.cycles_for(time));
            prop_assert!(running
                .windows(2)
                .all(|w| w[1].remaining_time() <= w[0].remaining_time()));
            prop_assert_eq!(running.last().map(|e| e.remaining_time()), Some(0));
            prop_assert_eq!(
                running.last().map(|e| u64::from(e.cycle_count())),
                Some(q.cycles_for(time))
            );
        }
    }

    #[test]
    fn prop_runs_are_repeatable(
        quantum in 1u64..20,
        specs in prop::collection::vec(process_spec(), 1..8),
    ) {
        let mut engine = suspension_engine(quantum, &specs);
        engine.run().unwrap();
        let first = engine.all_logs();
        engine.run().unwrap();
        let second = engine.all_logs();

        prop_assert_eq!(first.len(), second.len());
        prop_assert!(first.iter().zip(&second).all(|(a, b)| a.same_state(b)));
    }

    #[test]
    fn prop_partition_admission_splits_catalog(
        capacity in 0u64..64,
        sizes in prop::collection::vec((1u64..40, 0u64..96, any::<bool>()), 1..12),
    ) {
        let mut engine = EngineBuilder::new()
            .with_mode(SimulationMode::Partition)
            .build()
            .unwrap();
        engine.add_partition("M", capacity).unwrap();

        let mut expected_admitted = 0;
        for (i, &(time, size, blocked)) in sizes.iter().enumerate() {
            let mut spec = ProcessSpec::new(format!("P{}", i), time)
                .with_size(size)
                .in_partition("M");
            if blocked {
                spec = spec.blocked();
            }
            if size <= capacity {
                expected_admitted += 1;
            }
            engine.add_process(spec).unwrap();
        }

        let summary = engine.run().unwrap();
        prop_assert_eq!(summary.admitted, expected_admitted);
        prop_assert_eq!(summary.rejected, sizes.len() - expected_admitted);
        prop_assert_eq!(engine.trace().count(Transition::Finished), expected_admitted);
        prop_assert_eq!(engine.trace().count(Transition::NotExecuted), summary.rejected);
        prop_assert_eq!(engine.trace().count(Transition::Initial), sizes.len());

        let report = engine.partition_report();
        let admitted_time: u64 = sizes
            .iter()
            .filter(|(_, size, _)| *size <= capacity)
            .map(|(time, ..)| *time)
            .sum();
        prop_assert_eq!(report[0].total_time, admitted_time);
    }
}

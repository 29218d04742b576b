/*!
 * Partition Tests
 * Admission control, partition snapshots, and the finalization report
 */

use pretty_assertions::assert_eq;
use rr_sim::{
    EngineConfig, Filter, PartitionReportRow, ProcessSpec, SchedulingEngine, SnapshotDetail,
    Transition, NONE_SENTINEL,
};

fn partition_engine(partitions: &[(&str, u64)]) -> SchedulingEngine {
    let mut engine = SchedulingEngine::with_config(EngineConfig::partition());
    for (name, capacity) in partitions {
        engine.add_partition(name, *capacity).unwrap();
    }
    engine
}

#[test]
fn test_oversized_process_is_not_executed() {
    let mut engine = partition_engine(&[("M", 10)]);
    engine
        .add_process(ProcessSpec::new("Big", 20).with_size(20).in_partition("M"))
        .unwrap();

    let summary = engine.run().unwrap();
    assert_eq!(summary.admitted, 0);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.dispatches, 0);

    assert_eq!(
        engine.trace().transitions(),
        vec![
            Transition::Initial,
            Transition::Partitioned,
            Transition::NotExecuted,
        ]
    );
    assert_eq!(engine.trace().count(Transition::Dispatched), 0);
    assert_eq!(engine.trace().count(Transition::Finished), 0);
}

#[test]
fn test_preamble_order() {
    let mut engine = partition_engine(&[("M1", 64), ("Empty", 64), ("M2", 64)]);
    engine
        .add_process(ProcessSpec::new("A", 10).with_size(8).in_partition("M2"))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("B", 10).with_size(8).in_partition("M1"))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("C", 10).with_size(8).in_partition("M1"))
        .unwrap();
    engine.run().unwrap();

    let initial: Vec<String> = engine
        .logs_by(Filter::Only(Transition::Initial))
        .iter()
        .map(|e| e.process_name().to_string())
        .collect();
    assert_eq!(initial, vec!["A", "B", "C"]);

    // One entry per non-empty partition, registry order, first assigned process
    let partitioned: Vec<(String, Option<String>)> = engine
        .logs_by(Filter::Only(Transition::Partitioned))
        .iter()
        .map(|e| {
            (
                e.process_name().to_string(),
                e.partition_name().map(str::to_string),
            )
        })
        .collect();
    assert_eq!(
        partitioned,
        vec![
            ("B".to_string(), Some("M1".to_string())),
            ("A".to_string(), Some("M2".to_string())),
        ]
    );
}

#[test]
fn test_blocked_path_in_partition_mode() {
    let mut engine = partition_engine(&[("M", 64)]);
    engine
        .add_process(
            ProcessSpec::new("P", 15)
                .blocked()
                .with_size(8)
                .in_partition("M"),
        )
        .unwrap();
    engine.run().unwrap();

    assert_eq!(
        engine.trace().transitions(),
        vec![
            Transition::Initial,
            Transition::Partitioned,
            Transition::Ready,
            Transition::Dispatched,
            Transition::Running,
            Transition::Block,
            Transition::Blocked,
            Transition::BlockingTransition,
            Transition::Wake,
            Transition::Ready,
            Transition::Dispatched,
            Transition::Running,
            Transition::Finished,
        ]
    );
}

#[test]
fn test_suspension_flags_ignored_in_partition_mode() {
    let mut engine = partition_engine(&[("M", 64)]);
    engine
        .add_process(
            ProcessSpec::new("P", 15)
                .suspended_ready()
                .with_size(8)
                .in_partition("M"),
        )
        .unwrap();
    engine.run().unwrap();

    assert_eq!(engine.trace().count(Transition::SuspendReady), 0);
    assert_eq!(engine.trace().count(Transition::TimeExpired), 1);
}

#[test]
fn test_snapshots_carry_size_and_partition() {
    let mut engine = partition_engine(&[("M", 64)]);
    engine
        .add_process(ProcessSpec::new("P", 5).with_size(32).in_partition("m"))
        .unwrap();
    engine.run().unwrap();

    let finished = engine.logs_by(Filter::Only(Transition::Finished));
    assert_eq!(
        finished[0].detail(),
        &SnapshotDetail::Partition {
            size: 32,
            partition: Some("m".into()),
        }
    );
    assert_eq!(finished[0].size(), Some(32));
}

#[test]
fn test_unassigned_and_stale_processes_do_not_fit() {
    let mut engine = partition_engine(&[("M", 64), ("Gone", 64)]);
    engine
        .add_process(ProcessSpec::new("Loose", 5).with_size(1))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("Stale", 5).with_size(1).in_partition("Gone"))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("Ok", 5).with_size(1).in_partition("M"))
        .unwrap();
    assert!(engine.remove_partition("gone"));

    engine.run().unwrap();
    let rejected: Vec<String> = engine
        .logs_by(Filter::Only(Transition::NotExecuted))
        .iter()
        .map(|e| e.process_name().to_string())
        .collect();
    assert_eq!(rejected, vec!["Loose", "Stale"]);
    assert_eq!(engine.trace().count(Transition::Finished), 1);
}

#[test]
fn test_partition_added_after_processes_links_them() {
    let mut engine = partition_engine(&[]);
    engine
        .add_process(ProcessSpec::new("A", 5).with_size(4).in_partition("Late"))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("B", 7).with_size(4).in_partition("late"))
        .unwrap();
    engine.add_partition("LATE", 4).unwrap();

    assert_eq!(
        engine.partition_report(),
        vec![PartitionReportRow {
            partition: "LATE".to_string(),
            total_time: 12,
            processes: "A, B".to_string(),
            process_count: 2,
        }]
    );
}

#[test]
fn test_time_only_edit_keeps_partition_order() {
    let mut engine = partition_engine(&[("M", 64)]);
    engine
        .add_process(ProcessSpec::new("A", 10).with_size(8).in_partition("M"))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("B", 10).with_size(8).in_partition("M"))
        .unwrap();

    let partitioned = |engine: &SchedulingEngine| -> Vec<String> {
        engine
            .logs_by(Filter::Only(Transition::Partitioned))
            .iter()
            .map(|e| e.process_name().to_string())
            .collect()
    };

    engine.run().unwrap();
    assert_eq!(partitioned(&engine), vec!["A"]);

    assert_eq!(
        engine.edit_process(
            0,
            "A",
            ProcessSpec::new("A", 20).with_size(8).in_partition("M")
        ),
        Ok(true)
    );
    engine.run().unwrap();

    assert_eq!(partitioned(&engine), vec!["A"]);
    let report = engine.partition_report();
    assert_eq!(report[0].processes, "A, B");
    assert_eq!(report[0].total_time, 30);
}

#[test]
fn test_finalization_report_after_run() {
    let mut engine = partition_engine(&[("Large", 100), ("Small", 16), ("Unused", 8)]);
    engine
        .add_process(ProcessSpec::new("P1", 40).with_size(90).in_partition("Large"))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("P2", 10).with_size(16).in_partition("Small"))
        .unwrap();
    engine
        .add_process(ProcessSpec::new("P3", 25).with_size(17).in_partition("Small"))
        .unwrap();
    engine.run().unwrap();

    let report = engine.partition_report();
    let summary: Vec<(&str, u64, &str)> = report
        .iter()
        .map(|r| (r.partition.as_str(), r.total_time, r.processes.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Unused", 0, NONE_SENTINEL),
            ("Small", 10, "P2"),
            ("Large", 40, "P1"),
        ]
    );
}

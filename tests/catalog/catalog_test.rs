/*!
 * Catalog Tests
 * Process and partition management through the engine API
 */

use pretty_assertions::assert_eq;
use rr_sim::{
    validate_spec, EngineConfig, ProcessSpec, SchedulingEngine, SharedEngine, SimulationError,
    ValidationError, ValidationMode,
};
use std::thread;

#[test]
fn test_boundary_validation() {
    assert_eq!(validate_spec(&ProcessSpec::new(" ", 5)), Err(ValidationError::EmptyName));
    assert_eq!(
        validate_spec(&ProcessSpec::new("P", 0)),
        Err(ValidationError::NonPositiveTime("P".into()))
    );
    assert_eq!(
        validate_spec(&ProcessSpec::new("P", 5).resumed()),
        Err(ValidationError::ResumedWithoutSuspension("P".into()))
    );
    assert_eq!(
        validate_spec(&ProcessSpec::new("P", 5).suspended_blocked()),
        Err(ValidationError::SuspendedBlockedWithoutBlocking("P".into()))
    );
    assert_eq!(
        validate_spec(&ProcessSpec::new("P", 5).blocked().suspended_blocked().resumed()),
        Ok(())
    );
}

#[test]
fn test_names_are_trimmed_and_case_insensitive() {
    let mut engine = SchedulingEngine::new();
    engine.add_process(ProcessSpec::new("  Alpha ", 10)).unwrap();

    assert!(engine.exists("alpha"));
    assert!(engine.exists(" ALPHA"));
    assert_eq!(engine.process(0).map(|p| p.name().to_string()), Some("Alpha".to_string()));
    assert!(matches!(
        engine.add_process(ProcessSpec::new("ALPHA", 3)),
        Err(ValidationError::DuplicateName(_))
    ));
}

#[test]
fn test_empty_catalog_run_fails() {
    let mut engine = SchedulingEngine::new();
    let err = engine.run().unwrap_err();
    assert_eq!(err, SimulationError::EmptyCatalog);
    assert_eq!(err.to_string(), "No processes to simulate");
}

#[test]
fn test_edit_then_run_uses_new_definition() {
    let mut engine = SchedulingEngine::new();
    engine.add_process(ProcessSpec::new("A", 10)).unwrap();
    engine.run().unwrap();
    assert_eq!(engine.trace().len(), 4);

    assert_eq!(engine.edit_process(0, "a", ProcessSpec::new("A", 20)), Ok(true));
    engine.run().unwrap();
    assert_eq!(engine.trace().len(), 8);
}

#[test]
fn test_stale_edit_is_ignored() {
    let mut engine = SchedulingEngine::new();
    engine.add_process(ProcessSpec::new("A", 10)).unwrap();
    engine.add_process(ProcessSpec::new("B", 10)).unwrap();
    engine.remove_process("A");

    // Index 0 now holds B
    assert_eq!(engine.edit_process(0, "A", ProcessSpec::new("A", 99)), Ok(false));
    assert_eq!(engine.processes().len(), 1);
    assert_eq!(engine.process(0).map(|p| p.original_time()), Some(10));
}

#[test]
fn test_permissive_mode_keeps_duplicates() {
    let mut engine = SchedulingEngine::with_config(
        EngineConfig::default().with_validation(ValidationMode::Permissive),
    );
    engine.add_process(ProcessSpec::new("Dup", 10)).unwrap();
    engine.add_process(ProcessSpec::new("dup", 20)).unwrap();

    let summary = engine.run().unwrap();
    assert_eq!(summary.finished, 2);
    assert_eq!(engine.find_process("DUP").map(|p| p.original_time()), Some(10));

    assert!(engine.remove_process("dup"));
    assert!(engine.is_empty());
}

#[test]
fn test_clear_logs_keeps_catalog() {
    let mut engine = SchedulingEngine::new();
    engine.add_process(ProcessSpec::new("A", 10)).unwrap();
    engine.run().unwrap();

    engine.clear_logs();
    assert!(engine.trace().is_empty());
    assert_eq!(engine.len(), 1);
}

#[test]
fn test_clear_all_keeps_partitions_registered() {
    let mut engine = SchedulingEngine::with_config(EngineConfig::partition());
    engine.add_partition("M", 10).unwrap();
    engine
        .add_process(ProcessSpec::new("A", 10).with_size(1).in_partition("M"))
        .unwrap();

    engine.clear_all();
    assert!(engine.is_empty());
    assert_eq!(engine.partitions().len(), 1);
    assert_eq!(engine.find_partition("m").map(|p| p.process_count()), Some(0));
}

#[test]
fn test_shared_engine_across_threads() {
    let shared = SharedEngine::new(SchedulingEngine::new());

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let engine = shared.clone();
            thread::spawn(move || engine.add_process(ProcessSpec::new(format!("T{}", i), 10 + i)))
        })
        .collect();
    for writer in writers {
        writer.join().unwrap().unwrap();
    }

    let summary = shared.run().unwrap();
    assert_eq!(summary.admitted, 4);
    assert_eq!(shared.read().len(), 4);
}

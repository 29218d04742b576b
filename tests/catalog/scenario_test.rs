/*!
 * Scenario Tests
 * Loading JSON scenarios from strings and files
 */

use pretty_assertions::assert_eq;
use rr_sim::{Filter, Scenario, ScenarioError, SimulationMode, Transition};
use std::io::Write;
use tempfile::NamedTempFile;

const SUSPENSION_SCENARIO: &str = r#"{
    "config": { "quantum": 10, "mode": "suspension" },
    "processes": [
        { "name": "P", "time": 25 },
        { "name": "Q", "time": 10, "blocked": true, "suspended_blocked": true, "suspended_ready": true }
    ]
}"#;

#[test]
fn test_suspension_scenario_runs() {
    let mut engine = Scenario::from_json(SUSPENSION_SCENARIO)
        .unwrap()
        .into_engine()
        .unwrap();
    assert_eq!(engine.mode(), SimulationMode::Suspension);

    let summary = engine.run().unwrap();
    assert_eq!(summary.finished, 2);
    assert_eq!(summary.dispatches, 4);
    assert_eq!(engine.logs_by(Filter::Only(Transition::Block)).len(), 0);
}

#[test]
fn test_scenario_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SUSPENSION_SCENARIO.as_bytes()).unwrap();

    let scenario = Scenario::from_path(file.path()).unwrap();
    assert_eq!(scenario.processes.len(), 2);
    assert_eq!(scenario.config.quantum.get(), 10);
}

#[test]
fn test_scenario_round_trips_through_json() {
    let scenario = Scenario::from_json(SUSPENSION_SCENARIO).unwrap();
    let json = serde_json::to_string(&scenario).unwrap();
    assert_eq!(Scenario::from_json(&json).unwrap(), scenario);
}

#[test]
fn test_duplicate_partition_is_rejected() {
    let result = Scenario::from_json(
        r#"{
            "config": { "mode": "partition" },
            "partitions": [{ "name": "M", "capacity": 1 }, { "name": "m", "capacity": 2 }],
            "processes": []
        }"#,
    )
    .unwrap()
    .into_engine();

    assert!(matches!(result, Err(ScenarioError::Simulation(_))));
}

#[test]
fn test_unknown_mode_is_a_parse_error() {
    let result = Scenario::from_json(r#"{ "config": { "mode": "lottery" }, "processes": [] }"#);
    assert!(matches!(result, Err(ScenarioError::Parse(_))));
}

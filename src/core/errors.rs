/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::data_structures::InlineString;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation result
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Simulation result
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Catalog validation errors raised before a definition reaches the engine
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Process name cannot be empty")]
    #[diagnostic(
        code(validation::empty_name),
        help("Give the process a non-blank name.")
    )]
    EmptyName,

    #[error("Process {0} must require at least one time unit")]
    #[diagnostic(
        code(validation::non_positive_time),
        help("CPU time must be greater than zero.")
    )]
    NonPositiveTime(InlineString),

    #[error("A process named {0} already exists")]
    #[diagnostic(
        code(validation::duplicate_name),
        help("Process names are compared case-insensitively. Pick another name or edit the existing entry.")
    )]
    DuplicateName(InlineString),

    #[error("Process {0} cannot be resumed without being suspended")]
    #[diagnostic(
        code(validation::resumed_without_suspension),
        help("Mark the process as suspended-ready or suspended-blocked, or clear the resumed flag.")
    )]
    ResumedWithoutSuspension(InlineString),

    #[error("Process {0} cannot be suspended-blocked while not blocking")]
    #[diagnostic(
        code(validation::suspended_blocked_without_blocking),
        help("Only blocking processes can be suspended from the blocked queue.")
    )]
    SuspendedBlockedWithoutBlocking(InlineString),

    #[error("Partition name cannot be empty")]
    #[diagnostic(
        code(validation::empty_partition_name),
        help("Give the partition a non-blank name.")
    )]
    EmptyPartitionName,

    #[error("A partition named {0} already exists")]
    #[diagnostic(
        code(validation::duplicate_partition),
        help("Partition names are compared case-insensitively.")
    )]
    DuplicatePartition(InlineString),
}

/// Simulation errors reported to the caller of the engine
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("No processes to simulate")]
    #[diagnostic(
        code(simulation::empty_catalog),
        help("Add at least one process before running the simulation.")
    )]
    EmptyCatalog,

    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(simulation::invalid_quantum),
        help("The quantum must be a positive number of time units.")
    )]
    InvalidQuantum(InlineString),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(simulation::configuration),
        help("Valid modes are 'suspension' and 'partition'; valid validation levels are 'strict' and 'permissive'.")
    )]
    Configuration(InlineString),

    #[error("Validation failed: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),
}

/// Scenario loading errors
/// Note: not serializable since it wraps I/O and parser failures
#[derive(Error, Debug, Diagnostic)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    #[diagnostic(
        code(scenario::io_error),
        help("Check that the scenario file exists and is readable.")
    )]
    Io(InlineString),

    #[error("Malformed scenario: {0}")]
    #[diagnostic(
        code(scenario::parse_error),
        help("Scenarios are JSON documents with 'config', 'partitions' and 'processes' keys.")
    )]
    Parse(InlineString),

    #[error("Simulation error: {0}")]
    #[diagnostic(transparent)]
    Simulation(#[from] SimulationError),
}

impl From<ValidationError> for ScenarioError {
    fn from(err: ValidationError) -> Self {
        ScenarioError::Simulation(err.into())
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(err: std::io::Error) -> Self {
        ScenarioError::Io(err.to_string().into())
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(err: serde_json::Error) -> Self {
        ScenarioError::Parse(err.to_string().into())
    }
}

/*!
 * Round-Robin Scheduling Simulator Library
 * Catalog, scheduling engine, trace, and reports exposed as a library
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scenario;
pub mod scheduler;
pub mod trace;

// Re-exports
pub use crate::core::errors::{
    ScenarioError, SimulationError, SimulationResult, ValidationError, ValidationResult,
};
pub use crate::core::types::{Cycles, Size, Time, DEFAULT_QUANTUM_TIME};
pub use memory::{Partition, PartitionRegistry};
pub use monitoring::init_tracing;
pub use process::{validate_spec, Catalog, Process, ProcessSpec, SuspensionFlags};
pub use report::{PartitionReportRow, NONE_SENTINEL};
pub use scenario::{PartitionSpec, Scenario};
pub use scheduler::{
    AdmissionCache, EngineBuilder, EngineConfig, Quantum, RunSummary, SchedulingEngine,
    SharedEngine, SimulationMode, ValidationMode,
};
pub use trace::{Filter, LogEntry, SnapshotDetail, Trace, Transition};

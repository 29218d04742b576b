/*!
 * Scheduling Engine
 * Round-Robin simulation with suspension states or partition admission
 */

use crate::memory::PartitionRegistry;
use crate::process::Catalog;
use crate::trace::Trace;
use tracing::info;

mod admission;
mod builder;
mod config;
mod dispatch;
mod operations;
mod rules;
mod run;
mod shared;
mod types;

pub use admission::AdmissionCache;
pub use builder::EngineBuilder;
pub use config::{EngineConfig, ENV_MODE, ENV_QUANTUM, ENV_VALIDATION};
pub use shared::SharedEngine;
pub use types::{Quantum, RunSummary, SimulationMode, ValidationMode};

/// Scheduling engine
///
/// Owns the process catalog, the partition registry, and the trace of the
/// most recent run. Every run works on clones of the catalog, so the
/// definitions never change underneath the presentation layer.
#[derive(Debug, Clone)]
pub struct SchedulingEngine {
    pub(crate) config: EngineConfig,
    pub(crate) catalog: Catalog,
    pub(crate) partitions: PartitionRegistry,
    pub(crate) trace: Trace,

    // Decisions of the last run; dropped whenever the catalog or partitions change
    pub(crate) admissions: Option<AdmissionCache>,
    pub(crate) last_summary: Option<RunSummary>,
}

impl SchedulingEngine {
    /// Create engine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create engine with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        info!(
            mode = %config.mode,
            quantum = config.quantum.get(),
            validation = %config.validation,
            "Scheduling engine initialized"
        );

        Self {
            config,
            catalog: Catalog::new(),
            partitions: PartitionRegistry::new(),
            trace: Trace::new(),
            admissions: None,
            last_summary: None,
        }
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> SimulationMode {
        self.config.mode
    }

    pub fn quantum(&self) -> Quantum {
        self.config.quantum
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn partition_registry(&self) -> &PartitionRegistry {
        &self.partitions
    }

    /// Summary of the last run, if any
    pub fn last_summary(&self) -> Option<&RunSummary> {
        self.last_summary.as_ref()
    }

    pub(crate) fn invalidate_admissions(&mut self) {
        self.admissions = None;
    }
}

impl Default for SchedulingEngine {
    fn default() -> Self {
        Self::new()
    }
}

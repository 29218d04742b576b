/*!
 * Scenario Loader
 * JSON documents describing a configured engine, its partitions and its catalog
 */

use crate::core::errors::ScenarioError;
use crate::core::types::Size;
use crate::monitoring::span_operation;
use crate::process::ProcessSpec;
use crate::scheduler::{EngineConfig, SchedulingEngine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Partition declared by a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSpec {
    pub name: String,
    pub capacity: Size,
}

/// Complete simulation input
///
/// ```json
/// {
///   "config": { "quantum": 10, "mode": "partition" },
///   "partitions": [{ "name": "M1", "capacity": 64 }],
///   "processes": [{ "name": "P1", "time": 25, "size": 32, "partition": "M1" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: EngineConfig,
    #[serde(default)]
    pub partitions: Vec<PartitionSpec>,
    pub processes: Vec<ProcessSpec>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Build an engine with the scenario's partitions and processes registered
    ///
    /// Partitions are registered first so every process is linked on insertion.
    pub fn into_engine(self) -> Result<SchedulingEngine, ScenarioError> {
        let span = span_operation("load_scenario");
        let _guard = span.enter();

        let mut engine = SchedulingEngine::with_config(self.config);
        for partition in &self.partitions {
            engine.add_partition(&partition.name, partition.capacity)?;
        }

        let count = self.processes.len();
        for spec in self.processes {
            engine.add_process(spec)?;
        }

        span.record_items_processed(count);
        span.record_result(true);
        info!(
            processes = count,
            partitions = self.partitions.len(),
            mode = %engine.mode(),
            "Scenario loaded"
        );
        Ok(engine)
    }
}

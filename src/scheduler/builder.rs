/*!
 * Engine Builder
 * Builder pattern for SchedulingEngine construction
 */

use super::config::EngineConfig;
use super::types::{Quantum, SimulationMode, ValidationMode};
use super::SchedulingEngine;
use crate::core::errors::SimulationResult;
use crate::core::types::Time;

/// Builder for SchedulingEngine
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    quantum: Option<Time>,
}

impl EngineBuilder {
    /// Create a builder seeded with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self.quantum = None;
        self
    }

    /// Quantum in time units; checked by `build`
    pub fn with_quantum(mut self, units: Time) -> Self {
        self.quantum = Some(units);
        self
    }

    pub fn with_mode(mut self, mode: SimulationMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.config.validation = validation;
        self
    }

    /// Build the engine, rejecting a zero quantum
    pub fn build(self) -> SimulationResult<SchedulingEngine> {
        let mut config = self.config;
        if let Some(units) = self.quantum {
            config.quantum = Quantum::new(units)?;
        }
        Ok(SchedulingEngine::with_config(config))
    }
}

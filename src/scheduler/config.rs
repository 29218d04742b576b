/*!
 * Engine Configuration
 *
 * Runtime configuration for quantum, rule set, and validation strictness
 */

use super::types::{Quantum, SimulationMode, ValidationMode};
use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::types::Time;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the quantum
pub const ENV_QUANTUM: &str = "RRSIM_QUANTUM";
/// Environment variable selecting the rule set
pub const ENV_MODE: &str = "RRSIM_MODE";
/// Environment variable selecting validation strictness
pub const ENV_VALIDATION: &str = "RRSIM_VALIDATION";

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub quantum: Quantum,
    pub mode: SimulationMode,
    pub validation: ValidationMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::suspension()
    }
}

impl EngineConfig {
    /// Suspension-state rules with the default quantum
    pub const fn suspension() -> Self {
        Self {
            quantum: Quantum::DEFAULT,
            mode: SimulationMode::Suspension,
            validation: ValidationMode::Strict,
        }
    }

    /// Partition-admission rules with the default quantum
    pub const fn partition() -> Self {
        Self {
            quantum: Quantum::DEFAULT,
            mode: SimulationMode::Partition,
            validation: ValidationMode::Strict,
        }
    }

    /// Defaults overridden by `RRSIM_QUANTUM`, `RRSIM_MODE` and `RRSIM_VALIDATION`
    pub fn from_env() -> SimulationResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_QUANTUM) {
            let units: Time = raw.trim().parse().map_err(|_| {
                let message = format!("{}={} is not a number", ENV_QUANTUM, raw);
                SimulationError::InvalidQuantum(message.into())
            })?;
            config.quantum = Quantum::new(units)?;
        }

        if let Ok(raw) = std::env::var(ENV_MODE) {
            config.mode = raw
                .parse()
                .map_err(|e: String| SimulationError::Configuration(e.into()))?;
        }

        if let Ok(raw) = std::env::var(ENV_VALIDATION) {
            config.validation = raw
                .parse()
                .map_err(|e: String| SimulationError::Configuration(e.into()))?;
        }

        Ok(config)
    }

    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_mode(mut self, mode: SimulationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }
}

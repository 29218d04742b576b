/*!
 * Scheduler Types
 * Domain types for simulation configuration and results
 */

use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::types::{Time, DEFAULT_QUANTUM_TIME};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule set driving a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    /// Blocking plus suspended-ready / suspended-blocked states
    #[default]
    Suspension,
    /// Fixed memory partitions gate admission
    Partition,
}

impl SimulationMode {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Suspension => "suspension",
            Self::Partition => "partition",
        }
    }
}

impl FromStr for SimulationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "suspension" | "suspend" | "suspensions" => Ok(Self::Suspension),
            "partition" | "partitions" | "memory" => Ok(Self::Partition),
            _ => Err(format!(
                "Invalid mode '{}'. Valid: suspension, partition",
                s
            )),
        }
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strictly catalog mutations are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject invalid or duplicate definitions
    #[default]
    Strict,
    /// Accept anything; the caller is trusted to have validated
    Permissive,
}

impl ValidationMode {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }

    #[inline(always)]
    pub const fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" | "lenient" => Ok(Self::Permissive),
            _ => Err(format!(
                "Invalid validation mode '{}'. Valid: strict, permissive",
                s
            )),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU time charged per dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantum(Time);

impl Quantum {
    pub const DEFAULT: Self = Self(DEFAULT_QUANTUM_TIME);

    /// Create a quantum; zero would never finish a process
    pub fn new(units: Time) -> SimulationResult<Self> {
        if units == 0 {
            return Err(SimulationError::InvalidQuantum(
                "quantum must be at least 1 time unit".into(),
            ));
        }
        Ok(Self(units))
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }

    /// Dispatches needed to finish `time` units of work
    #[inline]
    pub const fn cycles_for(&self, time: Time) -> Time {
        if time == 0 {
            1
        } else {
            time.div_ceil(self.0)
        }
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = Time::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

/// Outcome of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunSummary {
    pub mode: SimulationMode,
    pub quantum: Time,
    /// Processes that entered the ready queue
    pub admitted: usize,
    /// Processes refused by partition admission
    pub rejected: usize,
    pub dispatches: u64,
    pub finished: usize,
    pub entries: usize,
}

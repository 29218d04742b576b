/*!
 * Shared Engine
 * Thread-safe handle serializing runs against queries
 */

use super::types::RunSummary;
use super::SchedulingEngine;
use crate::core::errors::{SimulationResult, ValidationResult};
use crate::process::ProcessSpec;
use crate::trace::{Filter, LogEntry};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable handle to one engine
///
/// Runs and catalog mutations take the write lock; queries take the read lock
/// and return owned copies, so readers never observe a half-written trace.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<SchedulingEngine>>,
}

impl SharedEngine {
    pub fn new(engine: SchedulingEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn run(&self) -> SimulationResult<RunSummary> {
        self.inner.write().run()
    }

    pub fn add_process(&self, spec: ProcessSpec) -> ValidationResult<()> {
        self.inner.write().add_process(spec)
    }

    pub fn remove_process(&self, name: &str) -> bool {
        self.inner.write().remove_process(name)
    }

    pub fn logs_by(&self, filter: Filter) -> Vec<LogEntry> {
        self.inner.read().logs_by(filter)
    }

    pub fn last_summary(&self) -> Option<RunSummary> {
        self.inner.read().last_summary().cloned()
    }

    /// Read access for queries not mirrored on the handle
    pub fn read(&self) -> RwLockReadGuard<'_, SchedulingEngine> {
        self.inner.read()
    }

    /// Write access for mutations not mirrored on the handle
    pub fn write(&self) -> RwLockWriteGuard<'_, SchedulingEngine> {
        self.inner.write()
    }
}

impl From<SchedulingEngine> for SharedEngine {
    fn from(engine: SchedulingEngine) -> Self {
        Self::new(engine)
    }
}

/*!
 * Simulation Run
 * Admission, ordering, and the Round-Robin drain for one run
 */

use super::admission::{order_by_time, Admission, AdmissionCache};
use super::dispatch::round_robin;
use super::rules::{rules_for, Recorder};
use super::types::RunSummary;
use super::SchedulingEngine;
use crate::core::errors::{SimulationError, SimulationResult};
use tracing::{info, info_span};

impl SchedulingEngine {
    /// Run the simulation over deep clones of the catalog
    ///
    /// The previous trace is discarded first. The catalog and partitions are
    /// left untouched, so repeated runs over an unchanged catalog produce the
    /// same sequence of snapshots.
    pub fn run(&mut self) -> SimulationResult<RunSummary> {
        if self.catalog.is_empty() {
            return Err(SimulationError::EmptyCatalog);
        }

        let span = info_span!(
            "simulation_run",
            mode = %self.config.mode,
            quantum = self.config.quantum.get()
        );
        let _guard = span.enter();

        info!(
            processes = self.catalog.len(),
            partitions = self.partitions.len(),
            "Simulation started"
        );

        self.trace.clear();
        self.last_summary = None;

        let rules = rules_for(self.config.mode);
        let mut recorder = Recorder::new(&mut self.trace, rules);

        let Admission {
            mut pool,
            decisions,
            rejected,
        } = rules.admit(&self.catalog, &self.partitions, &mut recorder);
        order_by_time(&mut pool);

        let admitted = pool.len();
        let stats = round_robin(pool, self.config.quantum, rules, &mut recorder);
        self.admissions = Some(decisions);

        let summary = RunSummary {
            mode: self.config.mode,
            quantum: self.config.quantum.get(),
            admitted,
            rejected,
            dispatches: stats.dispatches,
            finished: stats.finished,
            entries: self.trace.len(),
        };

        info!(
            admitted,
            rejected,
            dispatches = summary.dispatches,
            entries = summary.entries,
            "Simulation finished"
        );

        self.last_summary = Some(summary.clone());
        Ok(summary)
    }

    /// Admission decisions of the last run, if still valid
    pub fn admission_cache(&self) -> Option<&AdmissionCache> {
        self.admissions.as_ref()
    }
}

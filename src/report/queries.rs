/*!
 * Trace Queries
 * Filtered log access plus suspension views rebuilt from the catalog or the trace
 */

use crate::process::Process;
use crate::scheduler::SchedulingEngine;
use crate::trace::{Filter, LogEntry, Trace, Transition};

impl SchedulingEngine {
    /// Entries tagged `filter` in trace order; `Filter::All` returns the whole trace
    pub fn logs_by(&self, filter: Filter) -> Vec<LogEntry> {
        self.trace.select(filter)
    }

    /// Entries tagged `filter` whose snapshot names `partition` (case-insensitive)
    pub fn logs_by_partition(&self, filter: Filter, partition: &str) -> Vec<LogEntry> {
        self.trace.select_in_partition(filter, partition)
    }

    pub fn all_logs(&self) -> Vec<LogEntry> {
        self.logs_by(Filter::All)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Catalog entries currently flagged suspended-ready
    pub fn suspended_ready_processes(&self) -> Vec<Process> {
        self.catalog_where(Process::is_suspended_ready)
    }

    /// Catalog entries currently flagged suspended-blocked
    pub fn suspended_blocked_processes(&self) -> Vec<Process> {
        self.catalog_where(Process::is_suspended_blocked)
    }

    /// Catalog entries currently flagged resumed
    pub fn resumed_processes(&self) -> Vec<Process> {
        self.catalog_where(Process::is_resumed)
    }

    /// Processes as they were when logged SUSPENDIDO_LISTO
    pub fn suspended_ready_from_trace(&self) -> Vec<Process> {
        self.rebuild_from_trace(&[Transition::SuspendedReady])
    }

    /// Processes as they were when logged SUSPENDIDO_BLOQUEADO
    pub fn suspended_blocked_from_trace(&self) -> Vec<Process> {
        self.rebuild_from_trace(&[Transition::SuspendedBlocked])
    }

    /// Processes as they were when resumed; ready resumes first, then blocked resumes
    pub fn resumed_from_trace(&self) -> Vec<Process> {
        self.rebuild_from_trace(&[Transition::ResumeReady, Transition::ResumeBlocked])
    }

    fn catalog_where(&self, predicate: impl Fn(&Process) -> bool) -> Vec<Process> {
        self.catalog.iter().filter(|p| predicate(p)).cloned().collect()
    }

    /// Merge each snapshot's mutable fields with the catalog definition.
    /// Snapshots of processes no longer in the catalog are skipped.
    fn rebuild_from_trace(&self, transitions: &[Transition]) -> Vec<Process> {
        transitions
            .iter()
            .flat_map(|&transition| self.trace.iter_transition(transition))
            .filter_map(|entry| {
                let definition = self.catalog.find(entry.process_name())?;
                Some(Process::with_runtime_state(
                    definition,
                    entry.remaining_time(),
                    entry.cycle_count(),
                    entry.is_blocked(),
                    entry.suspension(),
                ))
            })
            .collect()
    }
}

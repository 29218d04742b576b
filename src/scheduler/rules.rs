/*!
 * Transition Rules
 * Mode-specific admission and post-quantum behavior over the shared dispatch loop
 */

use super::admission::Admission;
use super::types::SimulationMode;
use crate::memory::PartitionRegistry;
use crate::process::{Catalog, Process};
use crate::trace::{LogEntry, SnapshotDetail, Trace, Transition};
use tracing::warn;

/// Blocked, suspended-blocked only: resume into the blocked queue, then wake.
/// `Blocked` appears a second time after the resume, matching the reference traces.
pub(crate) const RESUME_TO_BLOCKED_PATH: [Transition; 3] = [
    Transition::ResumeBlocked,
    Transition::Blocked,
    Transition::Wake,
];

/// Records snapshots using the active rule set's detail
pub(crate) struct Recorder<'a> {
    trace: &'a mut Trace,
    rules: &'a dyn TransitionRules,
}

impl<'a> Recorder<'a> {
    pub fn new(trace: &'a mut Trace, rules: &'a dyn TransitionRules) -> Self {
        Self { trace, rules }
    }

    #[inline]
    pub fn log(&mut self, process: &Process, transition: Transition) {
        let detail = self.rules.detail(process);
        self.trace.push(LogEntry::capture(process, transition, detail));
    }

    pub fn log_all(&mut self, process: &Process, transitions: &[Transition]) {
        for &transition in transitions {
            self.log(process, transition);
        }
    }
}

/// Rule set plugged into the Round-Robin loop
pub(crate) trait TransitionRules: Send + Sync {
    fn mode(&self) -> SimulationMode;

    /// Mode-specific half of every snapshot
    fn detail(&self, process: &Process) -> SnapshotDetail;

    /// Decide which catalog entries enter the ready queue, logging any preamble
    fn admit(
        &self,
        catalog: &Catalog,
        partitions: &PartitionRegistry,
        recorder: &mut Recorder<'_>,
    ) -> Admission;

    /// Called after BLOQUEAR and BLOQUEADO were logged; the process is re-enqueued afterwards
    fn on_blocked(&self, process: &Process, recorder: &mut Recorder<'_>);

    /// Called for an unfinished, non-blocking process; the process is re-enqueued afterwards
    fn on_expired(&self, process: &Process, recorder: &mut Recorder<'_>);
}

/// Blocking plus medium-term suspension states
pub(crate) struct SuspensionRules;

impl TransitionRules for SuspensionRules {
    fn mode(&self) -> SimulationMode {
        SimulationMode::Suspension
    }

    fn detail(&self, process: &Process) -> SnapshotDetail {
        SnapshotDetail::suspension_of(process)
    }

    fn admit(
        &self,
        catalog: &Catalog,
        _partitions: &PartitionRegistry,
        _recorder: &mut Recorder<'_>,
    ) -> Admission {
        Admission::everyone(catalog)
    }

    fn on_blocked(&self, process: &Process, recorder: &mut Recorder<'_>) {
        let flags = process.suspension();
        match (flags.suspended_blocked, flags.suspended_ready) {
            (true, true) => recorder.log_all(
                process,
                &[
                    Transition::SuspendBlocked,
                    Transition::SuspendedBlocked,
                    Transition::SuspendedBlockedToReady,
                    Transition::SuspendedReady,
                    Transition::ResumeReady,
                ],
            ),
            (true, false) => {
                recorder.log_all(
                    process,
                    &[Transition::SuspendBlocked, Transition::SuspendedBlocked],
                );
                recorder.log_all(process, &RESUME_TO_BLOCKED_PATH);
            }
            (false, true) => recorder.log_all(
                process,
                &[
                    Transition::Wake,
                    Transition::Ready,
                    Transition::ReadyToSuspended,
                    Transition::SuspendedReady,
                    Transition::ResumeReady,
                ],
            ),
            (false, false) => recorder.log(process, Transition::Wake),
        }
    }

    fn on_expired(&self, process: &Process, recorder: &mut Recorder<'_>) {
        if process.is_suspended_ready() {
            recorder.log_all(
                process,
                &[
                    Transition::SuspendReady,
                    Transition::SuspendedReady,
                    Transition::ResumeReady,
                ],
            );
        } else {
            recorder.log(process, Transition::TimeExpired);
        }
    }
}

/// Fixed-partition admission control
pub(crate) struct PartitionRules;

impl TransitionRules for PartitionRules {
    fn mode(&self) -> SimulationMode {
        SimulationMode::Partition
    }

    fn detail(&self, process: &Process) -> SnapshotDetail {
        SnapshotDetail::partition_of(process)
    }

    fn admit(
        &self,
        catalog: &Catalog,
        partitions: &PartitionRegistry,
        recorder: &mut Recorder<'_>,
    ) -> Admission {
        for process in catalog {
            recorder.log(process, Transition::Initial);
        }

        for partition in partitions.iter().filter(|p| p.has_assigned_processes()) {
            if let Some((_, process)) = partition.members(catalog).next() {
                recorder.log(process, Transition::Partitioned);
            }
        }

        let mut admission = Admission::default();
        for process in catalog {
            let fits = partitions.admits(process);
            admission.record(process, fits);
            if !fits {
                warn!(
                    process = process.name(),
                    size = process.size(),
                    partition = process.partition().unwrap_or("-"),
                    "Process rejected by partition admission"
                );
                recorder.log(process, Transition::NotExecuted);
            }
        }
        admission
    }

    fn on_blocked(&self, process: &Process, recorder: &mut Recorder<'_>) {
        recorder.log_all(process, &[Transition::BlockingTransition, Transition::Wake]);
    }

    fn on_expired(&self, process: &Process, recorder: &mut Recorder<'_>) {
        recorder.log(process, Transition::TimeExpired);
    }
}

static SUSPENSION_RULES: SuspensionRules = SuspensionRules;
static PARTITION_RULES: PartitionRules = PartitionRules;

/// Rule set for a mode
pub(crate) fn rules_for(mode: SimulationMode) -> &'static dyn TransitionRules {
    match mode {
        SimulationMode::Suspension => &SUSPENSION_RULES,
        SimulationMode::Partition => &PARTITION_RULES,
    }
}

/*!
 * Round-Robin Dispatch
 * FIFO dispatch loop shared by every rule set
 */

use super::rules::{Recorder, TransitionRules};
use super::types::Quantum;
use crate::process::Process;
use crate::trace::Transition;
use std::collections::VecDeque;
use tracing::debug;

/// Counters gathered while draining the ready queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DispatchStats {
    pub dispatches: u64,
    pub finished: usize,
}

/// Drain the ready queue
///
/// Each dispatch charges exactly one quantum, so a process leaves the queue
/// after at most `ceil(original_time / quantum)` dispatches. The finished check
/// runs before the blocked check: a process whose last quantum empties it never
/// enters the blocking path.
pub(crate) fn round_robin(
    pool: Vec<Process>,
    quantum: Quantum,
    rules: &dyn TransitionRules,
    recorder: &mut Recorder<'_>,
) -> DispatchStats {
    let mut queue: VecDeque<Process> = pool.into();
    let mut stats = DispatchStats::default();

    while let Some(mut process) = queue.pop_front() {
        recorder.log(&process, Transition::Ready);
        recorder.log(&process, Transition::Dispatched);

        process.consume_quantum(quantum.get());
        stats.dispatches += 1;
        recorder.log(&process, Transition::Running);

        debug!(
            process = process.name(),
            remaining = process.remaining_time(),
            cycle = process.cycle_count(),
            queued = queue.len(),
            "Dispatched"
        );

        if process.is_finished() {
            recorder.log(&process, Transition::Finished);
            stats.finished += 1;
            continue;
        }

        if process.is_blocked() {
            recorder.log_all(&process, &[Transition::Block, Transition::Blocked]);
            rules.on_blocked(&process, recorder);
        } else {
            rules.on_expired(&process, recorder);
        }

        queue.push_back(process);
    }

    stats
}

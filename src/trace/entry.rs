/*!
 * Trace Entries
 * Immutable snapshots of a process at the moment of a transition
 */

use super::transition::Transition;
use crate::core::serde::system_time_micros;
use crate::core::types::{Cycles, Size, Time};
use crate::core::InlineString;
use crate::process::types::{blocking_label, SuspensionFlags};
use crate::process::Process;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Mode-specific part of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotDetail {
    Suspension(SuspensionFlags),
    Partition {
        size: Size,
        partition: Option<InlineString>,
    },
}

impl SnapshotDetail {
    pub fn suspension_of(process: &Process) -> Self {
        Self::Suspension(process.suspension())
    }

    pub fn partition_of(process: &Process) -> Self {
        Self::Partition {
            size: process.size(),
            partition: process.inline_partition().cloned(),
        }
    }
}

/// One trace record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LogEntry {
    process_name: InlineString,
    remaining_time: Time,
    blocked: bool,
    cycle_count: Cycles,
    detail: SnapshotDetail,
    transition: Transition,
    #[serde(with = "system_time_micros")]
    timestamp: SystemTime,
}

impl LogEntry {
    /// Snapshot `process` as it is right now
    pub fn capture(process: &Process, transition: Transition, detail: SnapshotDetail) -> Self {
        Self {
            process_name: process.inline_name().clone(),
            remaining_time: process.remaining_time(),
            blocked: process.is_blocked(),
            cycle_count: process.cycle_count(),
            detail,
            transition,
            timestamp: SystemTime::now(),
        }
    }

    pub fn process_name(&self) -> &str {
        self.process_name.as_str()
    }

    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn cycle_count(&self) -> Cycles {
        self.cycle_count
    }

    pub fn detail(&self) -> &SnapshotDetail {
        &self.detail
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Suspension flags at capture time; all clear for partition snapshots
    pub fn suspension(&self) -> SuspensionFlags {
        match &self.detail {
            SnapshotDetail::Suspension(flags) => *flags,
            SnapshotDetail::Partition { .. } => SuspensionFlags::NONE,
        }
    }

    pub fn size(&self) -> Option<Size> {
        match &self.detail {
            SnapshotDetail::Partition { size, .. } => Some(*size),
            SnapshotDetail::Suspension(_) => None,
        }
    }

    pub fn partition_name(&self) -> Option<&str> {
        match &self.detail {
            SnapshotDetail::Partition { partition, .. } => partition.as_deref(),
            SnapshotDetail::Suspension(_) => None,
        }
    }

    pub fn status_label(&self) -> &'static str {
        blocking_label(self.blocked)
    }

    /// Same transition, time and cycle values; timestamps are ignored
    pub fn same_state(&self, other: &LogEntry) -> bool {
        self.process_name == other.process_name
            && self.remaining_time == other.remaining_time
            && self.blocked == other.blocked
            && self.cycle_count == other.cycle_count
            && self.detail == other.detail
            && self.transition == other.transition
    }
}

/*!
 * Partition Report
 * Per-partition totals over admitted processes
 */

use crate::core::types::Time;
use crate::memory::Partition;
use crate::process::Process;
use crate::scheduler::SchedulingEngine;
use serde::{Deserialize, Serialize};

/// Process list shown for a partition with no admitted processes
pub const NONE_SENTINEL: &str = "Ninguno";

/// One row of the finalization report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PartitionReportRow {
    pub partition: String,
    pub total_time: Time,
    /// Comma-joined names, or `Ninguno`
    pub processes: String,
    pub process_count: usize,
}

impl SchedulingEngine {
    /// Finalization report, rows ascending by total time
    ///
    /// Uses the admission decisions of the last run; without a valid run the
    /// same admission rule is evaluated directly.
    pub fn partition_report(&self) -> Vec<PartitionReportRow> {
        let mut rows: Vec<PartitionReportRow> =
            self.partitions.iter().map(|p| self.report_row(p)).collect();
        rows.sort_by_key(|row| row.total_time);
        rows
    }

    fn report_row(&self, partition: &Partition) -> PartitionReportRow {
        let admitted: Vec<&Process> = partition
            .members(&self.catalog)
            .filter(|&(index, process)| self.was_admitted(index, process))
            .map(|(_, process)| process)
            .collect();

        let processes = if admitted.is_empty() {
            NONE_SENTINEL.to_string()
        } else {
            admitted
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        };

        PartitionReportRow {
            partition: partition.name().to_string(),
            total_time: admitted.iter().map(|p| p.original_time()).sum(),
            processes,
            process_count: admitted.len(),
        }
    }

    fn was_admitted(&self, index: usize, process: &Process) -> bool {
        self.admissions
            .as_ref()
            .and_then(|cache| cache.get_at(index))
            .unwrap_or_else(|| self.partitions.admits(process))
    }
}

/*!
 * Reporting
 * Read-only views over the catalog, the trace, and partition usage
 */

mod partitions;
mod queries;

pub use partitions::{PartitionReportRow, NONE_SENTINEL};

/*!
 * Trace Module
 * Transition tags, snapshots, and the indexed execution trace
 */

pub mod entry;
pub mod log;
pub mod transition;

pub use entry::{LogEntry, SnapshotDetail};
pub use log::Trace;
pub use transition::{Filter, Transition};

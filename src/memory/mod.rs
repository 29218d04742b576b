/*!
 * Memory Module
 * Fixed memory partitions used for admission control
 */

pub mod partition;

// Re-export for convenience
pub use partition::{Partition, PartitionRegistry};

/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated CPU time units
pub type Time = u64;

/// Number of dispatch cycles consumed by a process
pub type Cycles = u32;

/// Memory size units used for partition admission
pub type Size = u64;

/// CPU time charged per dispatch unless the engine is configured otherwise
pub const DEFAULT_QUANTUM_TIME: Time = 10;

/// Fold a name for case-insensitive identity comparisons
#[inline]
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Compare two process or partition names the way the catalog does
#[inline]
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

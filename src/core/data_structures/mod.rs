/*!
 * Data Structures
 *
 * Specialized data structures for simulation records:
 * - Inline strings for process and partition names copied into every snapshot
 */

mod inline_string;

pub use inline_string::InlineString;

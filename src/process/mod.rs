/*!
 * Process Module
 * Process definitions, catalog, and boundary validation
 */

pub mod catalog;
pub mod types;
pub mod validation;

// Re-export for convenience
pub use catalog::Catalog;
pub use types::{Process, ProcessSpec, SuspensionFlags};
pub use validation::validate_spec;

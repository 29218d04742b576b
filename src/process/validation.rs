/*!
 * Process Definition Validation
 * Boundary checks applied before a definition enters the catalog
 */

use super::catalog::Catalog;
use super::types::ProcessSpec;
use crate::core::errors::{ValidationError, ValidationResult};

/// Validate the shape of a definition on its own
pub fn validate_spec(spec: &ProcessSpec) -> ValidationResult<()> {
    let name = spec.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if spec.time == 0 {
        return Err(ValidationError::NonPositiveTime(name.into()));
    }

    if spec.suspension.resumed && !spec.suspension.is_suspended() {
        return Err(ValidationError::ResumedWithoutSuspension(name.into()));
    }

    if spec.suspension.suspended_blocked && !spec.blocked {
        return Err(ValidationError::SuspendedBlockedWithoutBlocking(name.into()));
    }

    Ok(())
}

/// Validate a definition about to be added to the catalog
pub(crate) fn validate_new(spec: &ProcessSpec, catalog: &Catalog) -> ValidationResult<()> {
    validate_spec(spec)?;

    if catalog.exists(&spec.name) {
        return Err(ValidationError::DuplicateName(spec.name.trim().into()));
    }

    Ok(())
}

/// Validate a replacement for the entry at `index`
///
/// Renaming onto the name of another entry is a duplicate; keeping the
/// entry's own name is not.
pub(crate) fn validate_edit(
    index: usize,
    spec: &ProcessSpec,
    catalog: &Catalog,
) -> ValidationResult<()> {
    validate_spec(spec)?;

    let clash = catalog
        .iter()
        .enumerate()
        .any(|(i, p)| i != index && p.matches_name(&spec.name));
    if clash {
        return Err(ValidationError::DuplicateName(spec.name.trim().into()));
    }

    Ok(())
}

/// Validate a partition name
pub(crate) fn validate_partition_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyPartitionName);
    }
    Ok(())
}

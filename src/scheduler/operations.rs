/*!
 * Catalog Operations
 * Add, edit, and remove process definitions and partitions
 */

use super::SchedulingEngine;
use crate::core::errors::{ValidationError, ValidationResult};
use crate::core::types::Size;
use crate::memory::Partition;
use crate::process::validation::{validate_edit, validate_new, validate_partition_name};
use crate::process::{Process, ProcessSpec};
use tracing::{info, warn};

impl SchedulingEngine {
    /// Add a process definition
    ///
    /// Strict validation rejects invalid or duplicate definitions. Permissive
    /// validation appends anything, so duplicates may coexist.
    pub fn add_process(&mut self, spec: ProcessSpec) -> ValidationResult<()> {
        if self.config.validation.is_strict() {
            validate_new(&spec, &self.catalog)?;
        }

        let process = self.catalog.push(&spec);
        self.partitions.link(process);
        self.invalidate_admissions();

        info!(
            process = spec.name.trim(),
            time = spec.time,
            blocked = spec.blocked,
            "Process added to catalog"
        );
        Ok(())
    }

    /// Check whether a process exists (case-insensitive)
    pub fn exists(&self, name: &str) -> bool {
        self.catalog.exists(name)
    }

    /// Remove every process with this name; returns whether anything was removed
    pub fn remove_process(&mut self, name: &str) -> bool {
        let removed = self.catalog.remove(name);
        if removed.is_empty() {
            return false;
        }

        self.partitions.unlink(name);
        self.invalidate_admissions();
        info!(process = name.trim(), count = removed.len(), "Process removed from catalog");
        true
    }

    /// Replace the entry at `index` if it is still named `name`
    ///
    /// Returns `Ok(false)` for an out-of-range index or a name mismatch; the
    /// presentation layer may be holding a stale row.
    pub fn edit_process(
        &mut self,
        index: usize,
        name: &str,
        spec: ProcessSpec,
    ) -> ValidationResult<bool> {
        let current = self.catalog.get(index).is_some_and(|p| p.matches_name(name));
        if !current {
            warn!(index, process = name, "Ignoring edit of stale catalog entry");
            return Ok(false);
        }

        if self.config.validation.is_strict() {
            validate_edit(index, &spec, &self.catalog)?;
        }

        let Some(old) = self.catalog.replace(index, name, &spec) else {
            return Ok(false);
        };
        // Membership follows catalog order, so rebuild instead of moving one name
        self.partitions.relink(&self.catalog);
        self.invalidate_admissions();

        info!(index, process = old.name(), "Process definition updated");
        Ok(true)
    }

    /// Remove every process and log entry
    pub fn clear_all(&mut self) {
        self.catalog.clear();
        self.partitions.release_all();
        self.clear_logs();
        info!("Catalog cleared");
    }

    /// Drop the trace of the last run
    pub fn clear_logs(&mut self) {
        self.trace.clear();
        self.last_summary = None;
        self.invalidate_admissions();
    }

    /// Deep copies of the catalog in insertion order
    pub fn processes(&self) -> Vec<Process> {
        self.catalog.to_vec()
    }

    pub fn process(&self, index: usize) -> Option<&Process> {
        self.catalog.get(index)
    }

    pub fn find_process(&self, name: &str) -> Option<&Process> {
        self.catalog.find(name)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Register a partition
    ///
    /// Catalog processes already naming it are assigned in catalog order.
    pub fn add_partition(&mut self, name: &str, capacity: Size) -> ValidationResult<()> {
        if self.config.validation.is_strict() {
            validate_partition_name(name)?;
            if self.partitions.exists(name) {
                return Err(ValidationError::DuplicatePartition(name.trim().into()));
            }
        }

        let partition = self.partitions.add(name, capacity, &self.catalog);
        info!(
            partition = partition.name(),
            capacity,
            assigned = partition.process_count(),
            "Partition added"
        );
        self.invalidate_admissions();
        Ok(())
    }

    /// Remove a partition; processes referencing it stay in the catalog and stop fitting
    pub fn remove_partition(&mut self, name: &str) -> bool {
        match self.partitions.remove(name) {
            Some(partition) => {
                info!(
                    partition = partition.name(),
                    orphaned = partition.process_count(),
                    "Partition removed"
                );
                self.invalidate_admissions();
                true
            }
            None => false,
        }
    }

    pub fn partitions(&self) -> Vec<Partition> {
        self.partitions.to_vec()
    }

    pub fn find_partition(&self, name: &str) -> Option<&Partition> {
        self.partitions.find(name)
    }
}

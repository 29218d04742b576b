/*!
 * Memory Partitions
 * Fixed-capacity regions gating process admission
 */

use crate::core::types::{Size, Time};
use crate::core::InlineString;
use crate::process::{Catalog, Process};
use serde::{Deserialize, Serialize};

/// Fixed-capacity memory region
///
/// `assigned` holds process names in catalog order without duplicates.
/// It is the only record of membership; processes keep just the partition
/// name they asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Partition {
    name: InlineString,
    capacity: Size,
    assigned: Vec<InlineString>,
}

impl Partition {
    pub fn new(name: &str, capacity: Size) -> Self {
        Self {
            name: name.trim().into(),
            capacity,
            assigned: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn capacity(&self) -> Size {
        self.capacity
    }

    /// Assigned process names in catalog order
    pub fn assigned(&self) -> &[InlineString] {
        &self.assigned
    }

    /// Catalog entries assigned here, with their catalog index
    ///
    /// A name resolves to the first catalog entry that has it and also asks
    /// for this partition, so same-named entries elsewhere are never picked.
    pub fn members<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (usize, &'a Process)> + 'a {
        self.assigned.iter().filter_map(move |name| {
            catalog.iter().enumerate().find(|(_, process)| {
                process.matches_name(name)
                    && process.partition().is_some_and(|p| self.matches_name(p))
            })
        })
    }

    pub fn process_count(&self) -> usize {
        self.assigned.len()
    }

    pub fn has_assigned_processes(&self) -> bool {
        !self.assigned.is_empty()
    }

    /// Whether a process of `size` fits in this region
    #[inline]
    pub fn fits(&self, size: Size) -> bool {
        size <= self.capacity
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.matches(name)
    }

    fn assign(&mut self, process: &InlineString) -> bool {
        if self.assigned.iter().any(|p| p.matches(process)) {
            return false;
        }
        self.assigned.push(process.clone());
        true
    }

    fn unassign(&mut self, process: &str) -> bool {
        let before = self.assigned.len();
        self.assigned.retain(|p| !p.matches(process));
        self.assigned.len() != before
    }
}

/// Owning registry of all partitions
#[derive(Debug, Clone, Default)]
pub struct PartitionRegistry {
    partitions: Vec<Partition>,
}

impl PartitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a partition and link catalog processes that already name it
    pub(crate) fn add(&mut self, name: &str, capacity: Size, catalog: &Catalog) -> &Partition {
        let mut partition = Partition::new(name, capacity);
        for process in catalog.iter() {
            if process.partition().is_some_and(|p| partition.matches_name(p)) {
                partition.assign(process.inline_name());
            }
        }
        self.partitions.push(partition);
        &self.partitions[self.partitions.len() - 1]
    }

    /// Drop a partition; processes keep their now-stale partition name
    pub(crate) fn remove(&mut self, name: &str) -> Option<Partition> {
        let index = self.partitions.iter().position(|p| p.matches_name(name))?;
        Some(self.partitions.remove(index))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&Partition> {
        self.partitions.iter().find(|p| p.matches_name(name))
    }

    /// Link a catalog process to the partition it names
    ///
    /// Returns false if the process names no partition or an unknown one.
    pub(crate) fn link(&mut self, process: &Process) -> bool {
        let Some(target) = process.partition() else {
            return false;
        };
        match self.partitions.iter_mut().find(|p| p.matches_name(target)) {
            Some(partition) => partition.assign(process.inline_name()),
            None => false,
        }
    }

    /// Rebuild every partition's membership from the catalog
    pub(crate) fn relink(&mut self, catalog: &Catalog) {
        self.release_all();
        for process in catalog {
            self.link(process);
        }
    }

    /// Remove a process name from every partition
    pub(crate) fn unlink(&mut self, process_name: &str) {
        for partition in &mut self.partitions {
            partition.unassign(process_name);
        }
    }

    /// Admission rule: the process names an existing partition and its size fits
    pub fn admits(&self, process: &Process) -> bool {
        process
            .partition()
            .and_then(|name| self.find(name))
            .is_some_and(|partition| partition.fits(process.size()))
    }

    /// Sum of `original_time` over the processes assigned to `name`
    pub fn total_assigned_time(&self, name: &str, catalog: &Catalog) -> Time {
        self.find(name)
            .map(|partition| {
                partition
                    .members(catalog)
                    .map(|(_, process)| process.original_time())
                    .sum()
            })
            .unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Empty every partition, keeping the partitions themselves
    pub(crate) fn release_all(&mut self) {
        for partition in &mut self.partitions {
            partition.assigned.clear();
        }
    }

    pub fn to_vec(&self) -> Vec<Partition> {
        self.partitions.clone()
    }
}

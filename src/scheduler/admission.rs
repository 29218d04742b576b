/*!
 * Admission
 * Executable pool construction, ordering, and cached admission decisions
 */

use crate::core::types::fold_name;
use crate::process::{Catalog, Process};
use ahash::AHashMap;

/// Processes admitted to one run plus the decision taken for every catalog entry
#[derive(Debug, Default)]
pub(crate) struct Admission {
    pub pool: Vec<Process>,
    pub decisions: AdmissionCache,
    pub rejected: usize,
}

impl Admission {
    /// Admit every catalog entry
    pub fn everyone(catalog: &Catalog) -> Self {
        let mut admission = Self::default();
        for process in catalog {
            admission.record(process, true);
        }
        admission
    }

    /// Record a decision; admitted processes are deep-cloned into the pool
    pub fn record(&mut self, process: &Process, admitted: bool) {
        self.decisions.insert(process.name(), admitted);
        if admitted {
            self.pool.push(process.clone());
        } else {
            self.rejected += 1;
        }
    }
}

/// Admission decisions of the last run
///
/// Decisions are recorded in catalog order, so the catalog index addresses
/// each entry even when permissive validation let names repeat.
#[derive(Debug, Clone, Default)]
pub struct AdmissionCache {
    by_index: Vec<bool>,
    by_name: AHashMap<String, bool>,
}

impl AdmissionCache {
    fn insert(&mut self, name: &str, admitted: bool) {
        self.by_index.push(admitted);
        // First decision wins for duplicated names, like catalog lookups
        self.by_name.entry(fold_name(name)).or_insert(admitted);
    }

    /// Decision for the first catalog entry with this name
    pub fn get(&self, name: &str) -> Option<bool> {
        self.by_name.get(&fold_name(name)).copied()
    }

    /// Decision for the catalog entry at `index`
    pub fn get_at(&self, index: usize) -> Option<bool> {
        self.by_index.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }
}

/// Order the pool once, ascending by required time
///
/// `sort_by_key` is stable, so equal times keep catalog order.
pub(crate) fn order_by_time(pool: &mut [Process]) {
    pool.sort_by_key(Process::original_time);
}

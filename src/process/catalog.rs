/*!
 * Process Catalog
 * Ordered set of process definitions owned by the engine
 */

use super::types::{Process, ProcessSpec};

/// Ordered process definitions
///
/// Lookups are case-insensitive. The catalog itself performs no validation;
/// callers decide whether to run the boundary validator first.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Process>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition
    pub(crate) fn push(&mut self, spec: &ProcessSpec) -> &Process {
        self.entries.push(Process::from_spec(spec));
        &self.entries[self.entries.len() - 1]
    }

    /// Check whether a process with this name exists
    pub fn exists(&self, name: &str) -> bool {
        self.entries.iter().any(|p| p.matches_name(name))
    }

    /// Remove every entry with this name, returning the removed entries
    pub(crate) fn remove(&mut self, name: &str) -> Vec<Process> {
        let mut removed = Vec::new();
        self.entries.retain(|p| {
            if p.matches_name(name) {
                removed.push(p.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Replace the entry at `index` when its stored name still matches `name`
    ///
    /// Returns the replaced entry, or `None` for an out-of-range index or a
    /// stale name.
    pub(crate) fn replace(&mut self, index: usize, name: &str, spec: &ProcessSpec) -> Option<Process> {
        let slot = self.entries.get_mut(index)?;
        if !slot.matches_name(name) {
            return None;
        }
        Some(std::mem::replace(slot, Process::from_spec(spec)))
    }

    pub fn get(&self, index: usize) -> Option<&Process> {
        self.entries.get(index)
    }

    /// First entry with this name
    pub fn find(&self, name: &str) -> Option<&Process> {
        self.entries.iter().find(|p| p.matches_name(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Deep copies of every entry in catalog order
    pub fn to_vec(&self) -> Vec<Process> {
        self.entries.clone()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

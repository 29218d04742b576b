/*!
 * Execution Trace
 * Append-only entry log with a per-transition index
 */

use super::entry::LogEntry;
use super::transition::{Filter, Transition};
use crate::core::types::names_match;
use ahash::AHashMap;

/// Append-only trace of one simulation run
///
/// The transition index is maintained on every push so tag queries never
/// rescan the full log.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    entries: Vec<LogEntry>,
    by_transition: AHashMap<Transition, Vec<usize>>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        let position = self.entries.len();
        self.by_transition
            .entry(entry.transition())
            .or_default()
            .push(position);
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.by_transition.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry in causal order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries carrying `transition`, in trace order
    pub fn iter_transition(&self, transition: Transition) -> impl Iterator<Item = &LogEntry> + '_ {
        self.by_transition
            .get(&transition)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i])
    }

    /// Owned copy of the entries selected by `filter`
    pub fn select(&self, filter: Filter) -> Vec<LogEntry> {
        match filter {
            Filter::All => self.entries.clone(),
            Filter::Only(transition) => self.iter_transition(transition).cloned().collect(),
        }
    }

    /// Owned copy of the entries selected by `filter` whose snapshot names `partition`
    pub fn select_in_partition(&self, filter: Filter, partition: &str) -> Vec<LogEntry> {
        let in_partition =
            |e: &&LogEntry| e.partition_name().is_some_and(|p| names_match(p, partition));
        match filter {
            Filter::All => self.entries.iter().filter(in_partition).cloned().collect(),
            Filter::Only(transition) => self
                .iter_transition(transition)
                .filter(in_partition)
                .cloned()
                .collect(),
        }
    }

    pub fn count(&self, transition: Transition) -> usize {
        self.by_transition.get(&transition).map_or(0, Vec::len)
    }

    /// Entries recorded for one process, in trace order
    pub fn for_process<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| names_match(e.process_name(), name))
    }

    /// The sequence of transitions, for comparing runs
    pub fn transitions(&self) -> Vec<Transition> {
        self.entries.iter().map(LogEntry::transition).collect()
    }
}

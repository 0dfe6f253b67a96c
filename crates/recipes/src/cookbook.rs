//! The cookbook: an append-only registry of entries keyed by name.

use cookbook_core::{CookbookError, CookbookResult, Entry, EntryLookup};

use crate::validate::validate_entry;

/// Entries in insertion order.
///
/// Ingredients and recipes share one namespace. Entries are never updated or
/// removed once admitted. Lookups are linear scans; the cookbook is small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookbook {
    entries: Vec<Entry>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit an entry.
    ///
    /// Name uniqueness is checked before the variant rules, so a duplicate name
    /// is reported even when the payload is also otherwise invalid.
    pub fn insert(&mut self, entry: Entry) -> CookbookResult<()> {
        if self.contains(entry.name()) {
            return Err(CookbookError::duplicate_name(entry.name()));
        }
        validate_entry(&entry)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Exact-match lookup. Absence is not an error.
    pub fn find_by_name(&self, name: &str) -> Option<&Entry> {
        self.entries.as_slice().find_by_name(name)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryLookup for Cookbook {
    fn find_by_name(&self, name: &str) -> Option<&Entry> {
        Cookbook::find_by_name(self, name)
    }
}

impl FromIterator<Entry> for Cookbook {
    /// Collect entries without admission checks (fixtures, benchmarks).
    /// With repeated names, lookup returns the first.
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

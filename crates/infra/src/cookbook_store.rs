use std::sync::{Arc, PoisonError, RwLock};

use cookbook_core::{CookbookResult, Entry, Summary};
use cookbook_recipes::{summarize, Cookbook};

/// Shared cookbook storage used by request handlers.
///
/// Each operation runs under one lock for its whole duration: `insert` does its
/// uniqueness check and append atomically, and `summarize` sees a single
/// consistent snapshot for the entire expansion.
pub trait CookbookStore: Send + Sync {
    fn insert(&self, entry: Entry) -> CookbookResult<()>;
    fn get(&self, name: &str) -> Option<Entry>;
    /// All entries in insertion order.
    fn list(&self) -> Vec<Entry>;
    fn summarize(&self, recipe_name: &str) -> CookbookResult<Summary>;
}

impl<S> CookbookStore for Arc<S>
where
    S: CookbookStore + ?Sized,
{
    fn insert(&self, entry: Entry) -> CookbookResult<()> {
        (**self).insert(entry)
    }

    fn get(&self, name: &str) -> Option<Entry> {
        (**self).get(name)
    }

    fn list(&self) -> Vec<Entry> {
        (**self).list()
    }

    fn summarize(&self, recipe_name: &str) -> CookbookResult<Summary> {
        (**self).summarize(recipe_name)
    }
}

/// In-memory cookbook guarded by a single `RwLock`.
///
/// A poisoned lock is recovered: every write is a single push, so a panic
/// cannot leave the cookbook half-updated.
#[derive(Debug, Default)]
pub struct InMemoryCookbookStore {
    inner: RwLock<Cookbook>,
}

impl InMemoryCookbookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CookbookStore for InMemoryCookbookStore {
    fn insert(&self, entry: Entry) -> CookbookResult<()> {
        let mut book = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let name = entry.name().to_string();
        let kind = entry.kind();
        book.insert(entry)?;
        tracing::debug!(%name, %kind, entries = book.len(), "cookbook entry admitted");
        Ok(())
    }

    fn get(&self, name: &str) -> Option<Entry> {
        let book = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        book.find_by_name(name).cloned()
    }

    fn list(&self) -> Vec<Entry> {
        let book = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        book.entries().to_vec()
    }

    fn summarize(&self, recipe_name: &str) -> CookbookResult<Summary> {
        let book = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let summary = summarize(&*book, recipe_name)?;
        tracing::debug!(
            recipe = %recipe_name,
            cook_time = summary.cook_time,
            ingredients = summary.ingredients.len(),
            "recipe summarized"
        );
        Ok(summary)
    }
}

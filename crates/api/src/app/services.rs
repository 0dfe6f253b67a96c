use std::sync::Arc;

use cookbook_core::{CookbookResult, Entry, Summary};
use cookbook_infra::{CookbookStore, InMemoryCookbookStore};

/// Everything the handlers need, shared behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn CookbookStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn CookbookStore>) -> Self {
        Self { store }
    }

    pub fn normalize_name(&self, raw: &str) -> CookbookResult<String> {
        cookbook_recipes::normalize(raw)
    }

    pub fn add_entry(&self, entry: Entry) -> CookbookResult<()> {
        self.store.insert(entry)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.store.list()
    }

    pub fn entry(&self, name: &str) -> Option<Entry> {
        self.store.get(name)
    }

    pub fn summary(&self, recipe_name: &str) -> CookbookResult<Summary> {
        self.store.summarize(recipe_name)
    }
}

/// Wire a fresh in-memory store. Every call returns an independent cookbook.
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryCookbookStore::new()))
}

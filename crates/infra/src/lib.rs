//! Infrastructure layer: shared, thread-safe cookbook storage.

pub mod cookbook_store;

pub use cookbook_store::{CookbookStore, InMemoryCookbookStore};

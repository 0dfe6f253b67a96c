//! `cookbook-core`: shared cookbook building blocks.
//!
//! This crate contains **pure data** primitives: the entry model, the summary
//! produced by aggregation, and the error taxonomy (no IO, no locking).

pub mod entry;
pub mod error;
pub mod summary;

pub use entry::{Entry, EntryKind, EntryLookup, Ingredient, Recipe, RequiredItem};
pub use error::{CookbookError, CookbookResult};
pub use summary::Summary;

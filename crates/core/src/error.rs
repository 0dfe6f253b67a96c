//! Cookbook error model.

use thiserror::Error;

/// Result type used across the cookbook crates.
pub type CookbookResult<T> = Result<T, CookbookError>;

/// Cookbook-level error.
///
/// Every variant is caller-correctable: the request was malformed or referred
/// to something the store does not hold. Nothing here represents an
/// infrastructure fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookbookError {
    /// The name normalizer could not produce a non-empty canonical form.
    #[error("malformed name")]
    MalformedName,

    /// The payload's type tag is neither `recipe` nor `ingredient`.
    #[error("invalid entry type: {0:?} (expected \"recipe\" or \"ingredient\")")]
    InvalidEntryType(String),

    /// An entry with this name is already registered.
    #[error("an entry named {0:?} already exists")]
    DuplicateEntryName(String),

    /// A recipe lists the same required item more than once.
    #[error("required items contain {0:?} more than once")]
    DuplicateRequiredItem(String),

    /// An ingredient was submitted with a cook time below zero.
    #[error("cook time must not be negative (got {0})")]
    NegativeCookTime(i64),

    /// The payload lacks a field its entry type requires.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The queried recipe, or an item referenced while expanding it, is absent.
    #[error("entry not found: {0:?}")]
    EntryNotFound(String),

    /// A recipe requires itself, directly or transitively.
    #[error("recipe {0:?} requires itself")]
    CyclicReference(String),
}

impl CookbookError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::EntryNotFound(name.into())
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateEntryName(name.into())
    }

    pub fn invalid_type(tag: impl Into<String>) -> Self {
        Self::InvalidEntryType(tag.into())
    }
}

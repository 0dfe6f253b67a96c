//! Cookbook entries: ingredients and recipes sharing one name namespace.

use serde::{Deserialize, Serialize};

use crate::error::{CookbookError, CookbookResult};

/// Reference from a recipe to another entry, by name.
///
/// The name is a lookup key, not ownership: it may point at an entry that was
/// never registered. That is only discovered when a summary is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Atomic entry with a fixed cook time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: i64,
}

/// Composite entry built from other entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A named cookbook entry.
///
/// Serialized with an explicit `type` tag, matching the admission payload:
/// `{"type":"ingredient","name":"Egg","cookTime":5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Entry::Ingredient(Ingredient {
            name: name.into(),
            cook_time,
        })
    }

    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Entry::Recipe(Recipe {
            name: name.into(),
            required_items,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(i) => &i.name,
            Entry::Recipe(r) => &r.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Ingredient(_) => EntryKind::Ingredient,
            Entry::Recipe(_) => EntryKind::Recipe,
        }
    }
}

/// Entry type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl EntryKind {
    /// Parse a wire type tag. Matching is exact: `"Recipe"` is not `"recipe"`.
    pub fn parse(tag: &str) -> CookbookResult<Self> {
        match tag {
            "ingredient" => Ok(EntryKind::Ingredient),
            "recipe" => Ok(EntryKind::Recipe),
            other => Err(CookbookError::invalid_type(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Ingredient => "ingredient",
            EntryKind::Recipe => "recipe",
        }
    }
}

impl core::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to entries by exact name.
///
/// Aggregation only needs this; it never sees how entries are stored or locked.
pub trait EntryLookup {
    fn find_by_name(&self, name: &str) -> Option<&Entry>;
}

impl<L> EntryLookup for &L
where
    L: EntryLookup + ?Sized,
{
    fn find_by_name(&self, name: &str) -> Option<&Entry> {
        (**self).find_by_name(name)
    }
}

impl EntryLookup for [Entry] {
    fn find_by_name(&self, name: &str) -> Option<&Entry> {
        self.iter().find(|e| e.name() == name)
    }
}

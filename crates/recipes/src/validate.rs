//! Entry admission rules.
//!
//! Two stages: [`entry_from_parts`] turns a loosely-typed payload into an
//! [`Entry`] (type tag and required fields), then [`validate_entry`] checks the
//! per-variant rules. Name uniqueness sits between the two and belongs to the
//! store.

use std::collections::HashSet;

use cookbook_core::{CookbookError, CookbookResult, Entry, EntryKind, RequiredItem};

/// Build an entry from its wire parts.
///
/// Fields that don't belong to the tagged type are ignored, so an ingredient
/// payload carrying `requiredItems` is still an ingredient.
pub fn entry_from_parts(
    type_tag: &str,
    name: String,
    required_items: Option<Vec<RequiredItem>>,
    cook_time: Option<i64>,
) -> CookbookResult<Entry> {
    match EntryKind::parse(type_tag)? {
        EntryKind::Recipe => {
            let items = required_items.ok_or(CookbookError::MissingField("requiredItems"))?;
            Ok(Entry::recipe(name, items))
        }
        EntryKind::Ingredient => {
            let cook_time = cook_time.ok_or(CookbookError::MissingField("cookTime"))?;
            Ok(Entry::ingredient(name, cook_time))
        }
    }
}

/// Check variant rules: no repeated required-item names, no negative cook time.
pub fn validate_entry(entry: &Entry) -> CookbookResult<()> {
    match entry {
        Entry::Recipe(recipe) => {
            if let Some(dup) = first_duplicate(&recipe.required_items) {
                return Err(CookbookError::DuplicateRequiredItem(dup.to_string()));
            }
            Ok(())
        }
        Entry::Ingredient(ingredient) => {
            if ingredient.cook_time < 0 {
                return Err(CookbookError::NegativeCookTime(ingredient.cook_time));
            }
            Ok(())
        }
    }
}

fn first_duplicate(items: &[RequiredItem]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .map(|i| i.name.as_str())
        .find(|name| !seen.insert(*name))
}

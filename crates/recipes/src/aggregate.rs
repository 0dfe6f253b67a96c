//! Recipe aggregation: expand a recipe down to its base ingredients.
//!
//! The walk is a depth-first expansion over name references. Each recursion
//! frame owns its accumulator and merges child summaries into it in the
//! recipe's stored item order, multiplying by the quantity at the call site.
//!
//! Any unresolved reference aborts the whole walk; there are no partial
//! summaries. A recipe that reappears on its own expansion path fails with
//! [`CookbookError::CyclicReference`]. The same sub-recipe reached through two
//! different branches is not a cycle and is expanded once per reference.

use cookbook_core::{CookbookError, CookbookResult, Entry, EntryLookup, Summary};

/// Summarize the recipe named `recipe_name`.
///
/// Fails with [`CookbookError::EntryNotFound`] before any traversal when the
/// name is absent or names an ingredient.
pub fn summarize<L>(lookup: &L, recipe_name: &str) -> CookbookResult<Summary>
where
    L: EntryLookup + ?Sized,
{
    match lookup.find_by_name(recipe_name) {
        Some(Entry::Recipe(_)) => {}
        _ => return Err(CookbookError::not_found(recipe_name)),
    }

    // The root is a single unit of the recipe.
    let mut root = Summary::empty(recipe_name);
    let mut path = Vec::new();
    root.absorb(unravel(lookup, recipe_name, &mut path)?, 1);
    Ok(root)
}

fn unravel<'a, L>(lookup: &'a L, name: &str, path: &mut Vec<&'a str>) -> CookbookResult<Summary>
where
    L: EntryLookup + ?Sized,
{
    let entry = lookup
        .find_by_name(name)
        .ok_or_else(|| CookbookError::not_found(name))?;

    match entry {
        Entry::Ingredient(ingredient) => Ok(Summary::leaf(&ingredient.name, ingredient.cook_time)),
        Entry::Recipe(recipe) => {
            if path.contains(&recipe.name.as_str()) {
                return Err(CookbookError::CyclicReference(recipe.name.clone()));
            }

            path.push(&recipe.name);
            let mut acc = Summary::empty(&recipe.name);
            for item in &recipe.required_items {
                let child = unravel(lookup, &item.name, path)?;
                acc.absorb(child, item.quantity);
            }
            path.pop();

            Ok(acc)
        }
    }
}

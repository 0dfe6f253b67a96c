//! Aggregation output: a recipe flattened to cook time and base ingredients.

use serde::{Deserialize, Serialize};

use crate::entry::RequiredItem;

/// Flattened view of a recipe.
///
/// `ingredients` holds unique names in first-occurrence order. Arithmetic wraps
/// on overflow; quantities are neither capped nor checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: i64,
    pub ingredients: Vec<RequiredItem>,
}

impl Summary {
    /// Empty accumulator for a recipe.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cook_time: 0,
            ingredients: Vec::new(),
        }
    }

    /// Leaf summary for a single unit of an ingredient.
    pub fn leaf(name: impl Into<String>, cook_time: i64) -> Self {
        let name = name.into();
        Self {
            ingredients: vec![RequiredItem::new(name.clone(), 1)],
            name,
            cook_time,
        }
    }

    /// Merge `child`, taken `quantity` times, into this summary.
    ///
    /// Ingredients already present (exact name match) have their quantity
    /// increased; new ones are appended.
    pub fn absorb(&mut self, child: Summary, quantity: i64) {
        self.cook_time = self
            .cook_time
            .wrapping_add(child.cook_time.wrapping_mul(quantity));

        for item in child.ingredients {
            let scaled = item.quantity.wrapping_mul(quantity);
            match self.ingredients.iter_mut().find(|i| i.name == item.name) {
                Some(existing) => existing.quantity = existing.quantity.wrapping_add(scaled),
                None => self.ingredients.push(RequiredItem::new(item.name, scaled)),
            }
        }
    }
}

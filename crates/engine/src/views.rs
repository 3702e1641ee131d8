//! Read-side view assembly.
//!
//! The two groupings here are observable contract, not rendering: item
//! names inside a category are sorted case-insensitively, and the grocery
//! list is ordered by category then item, both case-insensitive. Equality
//! of names everywhere else in the engine stays exact-match.

use std::collections::HashMap;

use crate::{GroceryItem, InventoryItem};

/// One inventory category with its item names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// A recipe together with the ingredients missing from the inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeStatus {
    pub name: String,
    pub ingredients: Vec<String>,
    pub missing: Vec<String>,
}

/// Group inventory items by their exact category label.
///
/// Categories are ordered case-insensitively (exact label as tie-break) and
/// item names within a category are sorted case-insensitively.
pub(crate) fn group_by_category(records: Vec<InventoryItem>) -> Vec<CategoryGroup> {
    let mut by_category: HashMap<String, Vec<String>> = HashMap::new();
    for record in records {
        by_category.entry(record.category).or_default().push(record.item);
    }

    let mut groups: Vec<CategoryGroup> = by_category
        .into_iter()
        .map(|(category, mut items)| {
            items.sort_by_key(|item| item.to_lowercase());
            CategoryGroup { category, items }
        })
        .collect();
    groups.sort_by(|a, b| {
        (a.category.to_lowercase(), &a.category).cmp(&(b.category.to_lowercase(), &b.category))
    });
    groups
}

/// Order grocery items by category then item name, case-insensitive.
pub(crate) fn sort_grocery(records: &mut [GroceryItem]) {
    records.sort_by_key(|record| (record.category.to_lowercase(), record.item.to_lowercase()));
}

/// Ingredients of one recipe that are not in the inventory.
///
/// Original order preserved, duplicates kept; matching is exact.
pub(crate) fn missing_ingredients(
    ingredients: &[String],
    in_inventory: &std::collections::HashSet<String>,
) -> Vec<String> {
    ingredients
        .iter()
        .filter(|ingredient| !in_inventory.contains(*ingredient))
        .cloned()
        .collect()
}

use serde::{Deserialize, Serialize};

pub mod inventory {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub item: String,
        pub category: String,
    }

    /// Identifies one (item, category) inventory record.
    ///
    /// Used both to delete an item and to move it onto the grocery list.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemRef {
        pub item: String,
        pub category: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub category: String,
        pub items: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InventoryResponse {
        pub categories: Vec<CategoryView>,
    }
}

pub mod grocery {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MoveToInventory {
        pub item: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroceryItemView {
        pub item: String,
        pub category: String,
        /// Recipes currently depending on this item; empty for manual entries.
        pub required_for: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroceryListResponse {
        pub items: Vec<GroceryItemView>,
    }
}

pub mod recipe {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeNew {
        pub name: String,
        pub ingredients: Vec<String>,
    }

    /// Identifies every recipe with the given name.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeRef {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeView {
        pub name: String,
        pub ingredients: Vec<String>,
        pub missing: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipesResponse {
        pub recipes: Vec<RecipeView>,
    }
}

use std::collections::HashSet;

use sea_orm::{ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    GroceryItem, Recipe, RecipeStatus, ResultEngine,
    grocery::{self, merge_required_for},
    inventory, recipes,
    util::{join_list, split_list},
    views,
};

use super::{Engine, normalize_required_name, with_tx};

/// Category assigned to grocery items created by recipe preparation.
const RECIPE_CATEGORY: &str = "Other";

impl Engine {
    /// Store a new recipe.
    ///
    /// The name is trimmed and must not be blank. Ingredients are trimmed,
    /// blank entries dropped, order and duplicates kept verbatim. Recipe
    /// names are not unique; adding the same name twice stores two recipes.
    pub async fn add_recipe(
        &self,
        name: &str,
        ingredients: &[String],
        user_id: &str,
    ) -> ResultEngine<()> {
        let name = normalize_required_name(name, "recipe")?;
        let ingredients: Vec<String> = ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .map(ToString::to_string)
            .collect();

        with_tx!(self, |db_tx| {
            let record = Recipe::new(name, ingredients);
            let mut model: recipes::ActiveModel = (&record).into();
            model.user_id = ActiveValue::Set(user_id.to_string());
            model.insert(&db_tx).await?;
            Ok(())
        })
    }

    /// Delete every recipe with the given name.
    ///
    /// `required_for` references to the deleted name are left in place on
    /// grocery items; the list keeps showing what originally demanded the
    /// item. Silent no-op when no recipe matches.
    pub async fn delete_recipe(&self, name: &str, user_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            recipes::Entity::delete_many()
                .filter(recipes::Column::UserId.eq(user_id))
                .filter(recipes::Column::Name.eq(name))
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }

    /// Every recipe with its ingredients and the ones missing from the
    /// inventory. Pure read.
    pub async fn recipes_with_missing(&self, user_id: &str) -> ResultEngine<Vec<RecipeStatus>> {
        with_tx!(self, |db_tx| {
            let in_inventory = self.inventory_names(&db_tx, user_id).await?;
            let records = recipes::Entity::find()
                .filter(recipes::Column::UserId.eq(user_id))
                .order_by_asc(recipes::Column::Name)
                .all(&db_tx)
                .await?;

            let mut statuses = Vec::with_capacity(records.len());
            for model in records {
                let recipe = Recipe::try_from(model)?;
                let missing = views::missing_ingredients(&recipe.ingredients, &in_inventory);
                statuses.push(RecipeStatus {
                    name: recipe.name,
                    ingredients: recipe.ingredients,
                    missing,
                });
            }
            Ok(statuses)
        })
    }

    /// Mapping recipe name -> missing ingredients, original order kept.
    pub async fn list_missing(&self, user_id: &str) -> ResultEngine<Vec<(String, Vec<String>)>> {
        let statuses = self.recipes_with_missing(user_id).await?;
        Ok(statuses
            .into_iter()
            .map(|status| (status.name, status.missing))
            .collect())
    }

    /// Push a recipe's missing ingredients onto the grocery list.
    ///
    /// For each ingredient not in the inventory: an existing grocery record
    /// gains the recipe name in its `required_for` set (sorted union), a
    /// missing one is created under the `"Other"` category. Ingredients
    /// already in the inventory are untouched. Silent no-op when the recipe
    /// does not exist; with duplicate names the first match wins.
    pub async fn prepare_recipe(&self, name: &str, user_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let Some(model) = recipes::Entity::find()
                .filter(recipes::Column::UserId.eq(user_id))
                .filter(recipes::Column::Name.eq(name))
                .one(&db_tx)
                .await?
            else {
                return Ok(());
            };
            let recipe = Recipe::try_from(model)?;

            let in_inventory = self.inventory_names(&db_tx, user_id).await?;
            for ingredient in views::missing_ingredients(&recipe.ingredients, &in_inventory) {
                let existing = grocery::Entity::find()
                    .filter(grocery::Column::UserId.eq(user_id))
                    .filter(grocery::Column::Item.eq(ingredient.clone()))
                    .one(&db_tx)
                    .await?;

                match existing {
                    Some(model) => {
                        let current = model
                            .required_for
                            .as_deref()
                            .map(split_list)
                            .unwrap_or_default();
                        let merged = merge_required_for(&current, &recipe.name);
                        let mut active: grocery::ActiveModel = model.into();
                        active.required_for = ActiveValue::Set(Some(join_list(&merged)));
                        active.update(&db_tx).await?;
                    }
                    None => {
                        let record = GroceryItem::required_for(
                            ingredient,
                            RECIPE_CATEGORY.to_string(),
                            recipe.name.clone(),
                        );
                        let mut active: grocery::ActiveModel = (&record).into();
                        active.user_id = ActiveValue::Set(user_id.to_string());
                        active.insert(&db_tx).await?;
                    }
                }
            }

            Ok(())
        })
    }

    /// Withdraw a recipe's demand from the grocery list.
    ///
    /// The name is removed from every `required_for` set that contains it,
    /// keeping the relative order of the remaining entries. Records whose
    /// set becomes empty stay on the list: a human still decides whether to
    /// buy them.
    pub async fn unprepare_recipe(&self, name: &str, user_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let records = grocery::Entity::find()
                .filter(grocery::Column::UserId.eq(user_id))
                .all(&db_tx)
                .await?;

            for model in records {
                let Some(raw) = model.required_for.as_deref() else {
                    continue;
                };
                let mut remaining = split_list(raw);
                let before = remaining.len();
                remaining.retain(|recipe| recipe != name);
                if remaining.len() == before {
                    continue;
                }

                let encoded = if remaining.is_empty() {
                    None
                } else {
                    Some(join_list(&remaining))
                };
                let mut active: grocery::ActiveModel = model.into();
                active.required_for = ActiveValue::Set(encoded);
                active.update(&db_tx).await?;
            }

            Ok(())
        })
    }

    async fn inventory_names<C: ConnectionTrait>(
        &self,
        db_tx: &C,
        user_id: &str,
    ) -> ResultEngine<HashSet<String>> {
        Ok(inventory::Entity::find()
            .filter(inventory::Column::UserId.eq(user_id))
            .all(db_tx)
            .await?
            .into_iter()
            .map(|model| model.item)
            .collect())
    }
}

use sea_orm::{ActiveValue, QueryFilter, TransactionTrait, prelude::*};

use crate::{CategoryGroup, EngineError, InventoryItem, ResultEngine, grocery, inventory, views};

use super::{Engine, normalize_required_name, with_tx};

impl Engine {
    /// Add an item to the inventory.
    ///
    /// Rejected with [`EngineError::ItemInGrocery`] when the name is
    /// currently on the grocery list: purchasing has to go through
    /// [`Engine::move_to_inventory`], otherwise the same name would exist in
    /// both collections. Adding the same (item, category) twice is a no-op.
    pub async fn add_item(&self, item: &str, category: &str, user_id: &str) -> ResultEngine<()> {
        let item = normalize_required_name(item, "item")?;
        let category = normalize_required_name(category, "category")?;
        with_tx!(self, |db_tx| {
            let in_grocery = grocery::Entity::find()
                .filter(grocery::Column::UserId.eq(user_id))
                .filter(grocery::Column::Item.eq(item.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if in_grocery {
                return Err(EngineError::ItemInGrocery(item));
            }

            let exists = inventory::Entity::find()
                .filter(inventory::Column::UserId.eq(user_id))
                .filter(inventory::Column::Item.eq(item.clone()))
                .filter(inventory::Column::Category.eq(category.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if !exists {
                let record = InventoryItem::new(item, category);
                let mut model: inventory::ActiveModel = (&record).into();
                model.user_id = ActiveValue::Set(user_id.to_string());
                model.insert(&db_tx).await?;
            }

            Ok(())
        })
    }

    /// Remove an (item, category) pair from the inventory.
    ///
    /// Silent no-op when nothing matches.
    pub async fn delete_item(&self, item: &str, category: &str, user_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            inventory::Entity::delete_many()
                .filter(inventory::Column::UserId.eq(user_id))
                .filter(inventory::Column::Item.eq(item))
                .filter(inventory::Column::Category.eq(category))
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }

    /// Move an item from the inventory onto the grocery list.
    ///
    /// The inventory side is removed unconditionally. If the name is
    /// already on the grocery list the existing record, including its
    /// `required_for` set, is left untouched; calling this twice in a row
    /// is the same as calling it once.
    pub async fn move_to_grocery(
        &self,
        item: &str,
        category: &str,
        user_id: &str,
    ) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            inventory::Entity::delete_many()
                .filter(inventory::Column::UserId.eq(user_id))
                .filter(inventory::Column::Item.eq(item))
                .filter(inventory::Column::Category.eq(category))
                .exec(&db_tx)
                .await?;

            let existing = grocery::Entity::find()
                .filter(grocery::Column::UserId.eq(user_id))
                .filter(grocery::Column::Item.eq(item))
                .one(&db_tx)
                .await?;
            if existing.is_none() {
                let record = crate::GroceryItem::new(item.to_string(), category.to_string());
                let mut model: grocery::ActiveModel = (&record).into();
                model.user_id = ActiveValue::Set(user_id.to_string());
                model.insert(&db_tx).await?;
            }

            Ok(())
        })
    }

    /// Restock an item: move it from the grocery list back into the inventory.
    ///
    /// The inventory record takes over the grocery record's category; the
    /// `required_for` set is discarded, restocking satisfies every recipe
    /// that was waiting for the item. Silent no-op when the item is not on
    /// the grocery list.
    pub async fn move_to_inventory(&self, item: &str, user_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let Some(model) = grocery::Entity::find()
                .filter(grocery::Column::UserId.eq(user_id))
                .filter(grocery::Column::Item.eq(item))
                .one(&db_tx)
                .await?
            else {
                return Ok(());
            };

            let category = model.category.clone();
            grocery::Entity::delete_by_id(model.id)
                .exec(&db_tx)
                .await?;

            let record = InventoryItem::new(item.to_string(), category);
            let mut active: inventory::ActiveModel = (&record).into();
            active.user_id = ActiveValue::Set(user_id.to_string());
            active.insert(&db_tx).await?;

            Ok(())
        })
    }

    /// Return the inventory grouped by category.
    ///
    /// Item names within a category are sorted case-insensitively, as are
    /// the categories themselves.
    pub async fn inventory_by_category(&self, user_id: &str) -> ResultEngine<Vec<CategoryGroup>> {
        with_tx!(self, |db_tx| {
            let records = inventory::Entity::find()
                .filter(inventory::Column::UserId.eq(user_id))
                .all(&db_tx)
                .await?
                .into_iter()
                .map(InventoryItem::try_from)
                .collect::<ResultEngine<Vec<_>>>()?;

            Ok(views::group_by_category(records))
        })
    }
}

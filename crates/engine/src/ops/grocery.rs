use sea_orm::{QueryFilter, TransactionTrait, prelude::*};

use crate::{GroceryItem, ResultEngine, grocery, views};

use super::{Engine, with_tx};

impl Engine {
    /// Return the grocery list ordered by category then item name,
    /// case-insensitive.
    pub async fn grocery_list(&self, user_id: &str) -> ResultEngine<Vec<GroceryItem>> {
        with_tx!(self, |db_tx| {
            let mut records = grocery::Entity::find()
                .filter(grocery::Column::UserId.eq(user_id))
                .all(&db_tx)
                .await?
                .into_iter()
                .map(GroceryItem::try_from)
                .collect::<ResultEngine<Vec<_>>>()?;

            views::sort_grocery(&mut records);
            Ok(records)
        })
    }
}

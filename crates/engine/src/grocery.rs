//! The module contains the `GroceryItem` struct and its entity.

use std::collections::BTreeSet;

use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{
    ResultEngine,
    util::{join_list, parse_uuid, split_list},
};

/// An item that still needs to be purchased.
///
/// `required_for` holds the names of the recipes currently depending on
/// this item. An empty set means the item landed on the list manually;
/// such entries are never removed just because no recipe needs them
/// anymore, a human still decides whether to buy them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroceryItem {
    /// Stable identifier for this record.
    ///
    /// This is a UUID generated once and persisted in the database.
    pub id: Uuid,
    pub item: String,
    pub category: String,
    pub required_for: Vec<String>,
}

impl GroceryItem {
    pub fn new(item: String, category: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            category,
            required_for: Vec::new(),
        }
    }

    pub fn required_for(item: String, category: String, recipe: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            category,
            required_for: vec![recipe],
        }
    }
}

/// Merge a recipe name into an existing `required_for` set.
///
/// The result is the sorted (case-sensitive) union of the previous members
/// plus the new name. The ordering is observable through the grocery list
/// and must stay deterministic regardless of preparation order.
pub(crate) fn merge_required_for(existing: &[String], recipe: &str) -> Vec<String> {
    let mut set: BTreeSet<String> = existing.iter().cloned().collect();
    set.insert(recipe.to_string());
    set.into_iter().collect()
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "grocery_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item: String,
    pub category: String,
    pub required_for: Option<String>,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&GroceryItem> for ActiveModel {
    fn from(value: &GroceryItem) -> Self {
        let required_for = if value.required_for.is_empty() {
            None
        } else {
            Some(join_list(&value.required_for))
        };
        Self {
            id: ActiveValue::Set(value.id.to_string()),
            item: ActiveValue::Set(value.item.clone()),
            category: ActiveValue::Set(value.category.clone()),
            required_for: ActiveValue::Set(required_for),
            user_id: ActiveValue::NotSet,
        }
    }
}

impl TryFrom<Model> for GroceryItem {
    type Error = crate::EngineError;

    fn try_from(value: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: parse_uuid(&value.id, "grocery item")?,
            item: value.item,
            category: value.category,
            required_for: value
                .required_for
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
        })
    }
}

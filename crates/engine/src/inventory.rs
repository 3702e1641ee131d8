//! The module contains the `InventoryItem` struct and its entity.

use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{ResultEngine, util::parse_uuid};

/// An item currently in the house.
///
/// Identified by its name and a free-form category label. An item name that
/// is in the inventory must never appear on the grocery list of the same
/// user at the same time; the engine operations enforce that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    /// Stable identifier for this record.
    ///
    /// This is a UUID generated once and persisted in the database.
    pub id: Uuid,
    pub item: String,
    pub category: String,
}

impl InventoryItem {
    pub fn new(item: String, category: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item: String,
    pub category: String,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&InventoryItem> for ActiveModel {
    fn from(value: &InventoryItem) -> Self {
        Self {
            id: ActiveValue::Set(value.id.to_string()),
            item: ActiveValue::Set(value.item.clone()),
            category: ActiveValue::Set(value.category.clone()),
            user_id: ActiveValue::NotSet,
        }
    }
}

impl TryFrom<Model> for InventoryItem {
    type Error = crate::EngineError;

    fn try_from(value: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: parse_uuid(&value.id, "inventory item")?,
            item: value.item,
            category: value.category,
        })
    }
}

//! The module contains the `Recipe` struct and its entity.

use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{
    ResultEngine,
    util::{join_list, parse_uuid, split_list},
};

/// A named, ordered list of ingredient names.
///
/// The order is the order the user typed; duplicates are kept. Two recipes
/// with the same name may coexist, the engine never deduplicates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    /// Stable identifier for this record.
    ///
    /// This is a UUID generated once and persisted in the database.
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(name: String, ingredients: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            ingredients,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub ingredients: String,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Recipe> for ActiveModel {
    fn from(value: &Recipe) -> Self {
        Self {
            id: ActiveValue::Set(value.id.to_string()),
            name: ActiveValue::Set(value.name.clone()),
            ingredients: ActiveValue::Set(join_list(&value.ingredients)),
            user_id: ActiveValue::NotSet,
        }
    }
}

impl TryFrom<Model> for Recipe {
    type Error = crate::EngineError;

    fn try_from(value: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: parse_uuid(&value.id, "recipe")?,
            name: value.name,
            ingredients: split_list(&value.ingredients),
        })
    }
}

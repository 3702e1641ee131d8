//! Reconciliation engine for the household pantry.
//!
//! The engine keeps three per-user collections mutually consistent:
//!
//! - the **inventory**: items currently in the house;
//! - the **grocery list**: items that need to be purchased, each optionally
//!   tagged with the recipes that demand it;
//! - the **recipe catalog**: named ordered ingredient lists.
//!
//! An item name, for a given user, is always in exactly one of three states:
//! absent, in inventory, or on the grocery list. Every operation runs inside
//! a single database transaction so the mutual-exclusion invariant survives
//! concurrent calls for the same user.

pub use error::EngineError;
pub use grocery::GroceryItem;
pub use inventory::InventoryItem;
pub use ops::{Engine, EngineBuilder};
pub use recipes::Recipe;
pub use views::{CategoryGroup, RecipeStatus};

mod error;
mod grocery;
mod inventory;
mod ops;
mod recipes;
mod util;
mod views;

type ResultEngine<T> = Result<T, EngineError>;

//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`ItemInGrocery`] thrown when an item on the grocery list is added to
//!   the inventory directly instead of being restocked.
//! - [`InvalidName`] thrown when a required name is blank.
//!
//!  [`ItemInGrocery`]: EngineError::ItemInGrocery
//!  [`InvalidName`]: EngineError::InvalidName
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" is on the grocery list, restock it from there instead")]
    ItemInGrocery(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ItemInGrocery(a), Self::ItemInGrocery(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

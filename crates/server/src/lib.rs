use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{run, run_with_listener, spawn_with_listener};

mod grocery;
mod inventory;
mod recipes;
mod server;
mod user;

pub mod types {
    pub mod inventory {
        pub use api_types::inventory::{CategoryView, InventoryResponse, ItemNew, ItemRef};
    }

    pub mod grocery {
        pub use api_types::grocery::{GroceryItemView, GroceryListResponse, MoveToInventory};
    }

    pub mod recipe {
        pub use api_types::recipe::{RecipeNew, RecipeRef, RecipeView, RecipesResponse};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

//TODO: Find a better solution
#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::ItemInGrocery(_) => StatusCode::CONFLICT,
        EngineError::InvalidName(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::InvalidId(_) | EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

//! Grocery list API endpoints.

use api_types::grocery::{GroceryItemView, GroceryListResponse, MoveToInventory};
use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::{ServerError, server::ServerState, user};

fn map_item(record: engine::GroceryItem) -> GroceryItemView {
    GroceryItemView {
        item: record.item,
        category: record.category,
        required_for: record.required_for,
    }
}

pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<GroceryListResponse>, ServerError> {
    let items = state
        .engine
        .grocery_list(&user.username)
        .await?
        .into_iter()
        .map(map_item)
        .collect();

    Ok(Json(GroceryListResponse { items }))
}

pub async fn move_to_inventory(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<MoveToInventory>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .move_to_inventory(&payload.item, &user.username)
        .await?;
    Ok(StatusCode::OK)
}

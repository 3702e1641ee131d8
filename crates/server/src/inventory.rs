//! Inventory API endpoints.

use api_types::inventory::{CategoryView, InventoryResponse, ItemNew, ItemRef};
use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::{ServerError, server::ServerState, user};

fn map_group(group: engine::CategoryGroup) -> CategoryView {
    CategoryView {
        category: group.category,
        items: group.items,
    }
}

pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<InventoryResponse>, ServerError> {
    let categories = state
        .engine
        .inventory_by_category(&user.username)
        .await?
        .into_iter()
        .map(map_group)
        .collect();

    Ok(Json(InventoryResponse { categories }))
}

pub async fn add(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ItemNew>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .add_item(&payload.item, &payload.category, &user.username)
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn remove(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ItemRef>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_item(&payload.item, &payload.category, &user.username)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn move_to_grocery(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ItemRef>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .move_to_grocery(&payload.item, &payload.category, &user.username)
        .await?;
    Ok(StatusCode::OK)
}

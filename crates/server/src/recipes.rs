//! Recipes API endpoints.

use api_types::recipe::{RecipeNew, RecipeRef, RecipeView, RecipesResponse};
use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::{ServerError, server::ServerState, user};

fn map_status(status: engine::RecipeStatus) -> RecipeView {
    RecipeView {
        name: status.name,
        ingredients: status.ingredients,
        missing: status.missing,
    }
}

pub async fn list(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
) -> Result<Json<RecipesResponse>, ServerError> {
    let recipes = state
        .engine
        .recipes_with_missing(&user.username)
        .await?
        .into_iter()
        .map(map_status)
        .collect();

    Ok(Json(RecipesResponse { recipes }))
}

pub async fn add(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<RecipeNew>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .add_recipe(&payload.name, &payload.ingredients, &user.username)
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn remove(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<RecipeRef>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_recipe(&payload.name, &user.username)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn prepare(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<RecipeRef>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .prepare_recipe(&payload.name, &user.username)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn unprepare(
    Extension(user): Extension<user::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<RecipeRef>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .unprepare_recipe(&payload.name, &user.username)
        .await?;
    Ok(StatusCode::OK)
}

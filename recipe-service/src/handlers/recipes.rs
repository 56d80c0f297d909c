use crate::dtos::RecipeResponse;
use crate::services::record_recipes_served;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `GET /recipes`: the whole collection, unfiltered and unpaginated.
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let recipes = state.db.list_recipes().await?;

    tracing::debug!(count = recipes.len(), "Listing recipes");
    record_recipes_served(recipes.len());

    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

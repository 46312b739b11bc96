use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};
use weekplate_shared::recipe::{MealTime, Recipe, RecipeFilter};

use crate::{
    error::{AppResult, decode, parse_id},
    routes::AppState,
};

#[derive(Deserialize, Default)]
pub struct SearchParams {
    pub tag: Option<String>,
    pub q: Option<String>,
}

/// GET /api/recipes, optionally narrowed to one meal time (`tag`) and a
/// name fragment (`q`).
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Recipe>>> {
    let tag = match params.tag.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(tag) => match tag.to_lowercase().parse::<MealTime>() {
            Ok(tag) => Some(tag),
            Err(_) => {
                return Err(
                    weekplate_shared::Error::InvalidInput(format!("unknown meal time {tag}"))
                        .into(),
                );
            }
        },
    };

    let filter = RecipeFilter {
        tag,
        query: params.q,
    };

    Ok(Json(state.recipe_command.search(&filter).await?))
}

pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Recipe>> {
    let id = parse_id(&id)?;

    match state.recipe_command.find(id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(weekplate_shared::Error::NotFound(format!("recipe {id}")).into()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Recipe>> {
    let recipe = state.recipe_command.create(decode(body)?).await?;
    tracing::info!(id = recipe.id, "recipe created");

    Ok(Json(recipe))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Recipe>> {
    let id = parse_id(&id)?;

    Ok(Json(state.recipe_command.update(id, decode(body)?).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.recipe_command.delete(id).await?;
    tracing::info!(id, "recipe deleted");

    Ok(Json(json!({"success": true})))
}

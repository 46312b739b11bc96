use axum::{Json, extract::State};
use weekplate_shopping::GroceryList;

use crate::{error::AppResult, routes::AppState};

pub async fn list(State(state): State<AppState>) -> AppResult<Json<GroceryList>> {
    let plan = state.mealplan_command.get().await?;

    Ok(Json(weekplate_shopping::aggregate(&plan)))
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::Value;
use weekplate_shared::mealplan::{DaySlots, WeeklyPlan};

use crate::{
    error::{AppResult, decode},
    routes::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDayInput {
    pub day: String,
    #[serde(default, alias = "midiId")]
    pub midday_id: Option<i64>,
    #[serde(default, alias = "soirId")]
    pub evening_id: Option<i64>,
}

pub async fn get(State(state): State<AppState>) -> AppResult<Json<WeeklyPlan>> {
    Ok(Json(state.mealplan_command.get().await?))
}

pub async fn set(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<DaySlots>> {
    let input: SetDayInput = decode(body)?;
    let slots = state
        .mealplan_command
        .set(&input.day, input.midday_id, input.evening_id)
        .await?;

    Ok(Json(slots))
}

pub async fn generate(State(state): State<AppState>) -> AppResult<Json<WeeklyPlan>> {
    Ok(Json(state.mealplan_command.generate().await?))
}

pub async fn clear(State(state): State<AppState>) -> AppResult<Json<WeeklyPlan>> {
    Ok(Json(state.mealplan_command.clear().await?))
}

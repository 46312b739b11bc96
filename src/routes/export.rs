use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use time::{OffsetDateTime, macros::format_description};
use weekplate_shared::backup::Backup;

use crate::{
    error::{AppResult, decode},
    routes::AppState,
};

fn today() -> String {
    let format = format_description!("[year]-[month]-[day]");

    OffsetDateTime::now_utc()
        .date()
        .format(&format)
        .unwrap_or_default()
}

fn attachment(file_name: String, content_type: &'static str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

pub async fn plan(State(state): State<AppState>) -> AppResult<Response> {
    let plan = state.mealplan_command.get().await?;
    let groceries = weekplate_shopping::aggregate(&plan);
    let report = weekplate_shopping::format_plan(&plan, &groceries);

    Ok(attachment(
        format!("weekly-plan-{}.txt", today()),
        "text/plain; charset=utf-8",
        report,
    ))
}

pub async fn backup(State(state): State<AppState>) -> AppResult<Response> {
    let backup = crate::backup::export(&state.recipe_command, &state.mealplan_command).await?;
    let body = serde_json::to_string_pretty(&backup).map_err(weekplate_shared::Error::from)?;

    Ok(attachment(
        format!("weekly-plan-backup-{}.json", today()),
        "application/json",
        body,
    ))
}

pub async fn import(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let backup: Backup = decode(body)?;

    let summary = crate::backup::import(&state.recipe_command, backup).await?;

    Ok(Json(json!({
        "success": true,
        "recipes": summary.recipes,
        "days": summary.days,
    })))
}

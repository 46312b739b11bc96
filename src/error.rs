use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "operation failed";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] weekplate_shared::Error),

    #[error("Invalid ID format")]
    InvalidId,

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Domain(weekplate_shared::Error::Validate(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": "validation failed", "details": errors}),
            ),
            AppError::Domain(weekplate_shared::Error::InvalidInput(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": msg, "details": []}),
            ),
            AppError::Domain(weekplate_shared::Error::NotFound(what)) => (
                StatusCode::NOT_FOUND,
                json!({"error": format!("{what} not found")}),
            ),
            AppError::Domain(weekplate_shared::Error::Unknown(e)) | AppError::Internal(e) => {
                tracing::error!("{e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": SERVER_ERROR_MESSAGE}),
                )
            }
            AppError::InvalidId => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid ID format"}),
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({"error": "unauthorized"})),
        };

        (status, Json(body)).into_response()
    }
}

/// Parses a path segment as a recipe id.
pub fn parse_id(value: &str) -> AppResult<i64> {
    value.trim().parse().map_err(|_| AppError::InvalidId)
}

/// Decodes a JSON request body. Unreadable bodies and payloads that do not
/// fit `T` are reported as invalid input.
pub fn decode<T: DeserializeOwned>(body: Result<Json<Value>, JsonRejection>) -> AppResult<T> {
    let Json(value) =
        body.map_err(|rejection| weekplate_shared::Error::InvalidInput(rejection.body_text()))?;

    serde_json::from_value(value).map_err(|e| {
        weekplate_shared::Error::InvalidInput(format!("invalid payload: {e}")).into()
    })
}

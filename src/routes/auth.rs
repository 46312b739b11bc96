use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::routes::AppState;

#[derive(Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let input: LoginInput = match crate::error::decode(body) {
        Ok(input) => input,
        Err(e) => return e.into_response(),
    };

    if !crate::auth::verify_password(&state.config.auth, &input.password) {
        tracing::info!("Rejected login attempt");

        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Incorrect password"})),
        )
            .into_response();
    }

    match crate::auth::build_cookie(&state.config.auth) {
        Ok(cookie) => (jar.add(cookie), Json(json!({"success": true}))).into_response(),
        Err(e) => {
            tracing::error!("Failed to issue session token: {e:?}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "message": "server error"})),
            )
                .into_response()
        }
    }
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(crate::auth::removal_cookie()),
        Json(json!({"success": true})),
    )
}

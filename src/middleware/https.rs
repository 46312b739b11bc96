use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::routes::AppState;

const HSTS: &str = "max-age=31536000; includeSubDomains";

/// Sends plain HTTP requests to their HTTPS twin when `server.force_https`
/// is on, and adds the HSTS header to every response.
pub async fn https_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path();

    if state.config.server.force_https && path != "/health" && path != "/ready" {
        let forwarded_https = req
            .headers()
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("https"));

        if !forwarded_https {
            let host = req
                .headers()
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let location = format!("https://{host}{path}");

            let mut response = (
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, location)],
            )
                .into_response();
            response
                .headers_mut()
                .insert(header::STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS));

            return response;
        }
    }

    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(header::STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS));

    response
}

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{auth::AUTH_COOKIE_NAME, error::AppError, routes::AppState};

/// How the gate treats a request path.
#[derive(Debug, PartialEq, Eq)]
pub enum Access {
    /// Served whatever the session state
    Public,
    /// Login page, bounced to `/` when already signed in
    Login,
    /// API call answered with 401 without a session
    Api,
    /// Browser page redirected to `/auth` without a session
    Page,
}

impl Access {
    pub fn of(path: &str, protect_api: bool) -> Self {
        if path == "/auth" {
            return Access::Login;
        }

        if path == "/api/auth" || path.starts_with("/api/auth/") {
            return Access::Public;
        }

        if path == "/api" || path.starts_with("/api/") {
            return if protect_api {
                Access::Api
            } else {
                Access::Public
            };
        }

        let last_segment = path.rsplit('/').next().unwrap_or_default();

        if path.starts_with("/static")
            || path.starts_with("/_")
            || path == "/health"
            || path == "/ready"
            || has_extension(last_segment)
        {
            return Access::Public;
        }

        Access::Page
    }
}

fn has_extension(segment: &str) -> bool {
    match segment.rsplit_once('.') {
        Some((stem, ext)) => {
            !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    }
}

/// Redirects or rejects requests lacking a valid session cookie.
pub async fn access_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let access = Access::of(req.uri().path(), state.config.auth.protect_api);

    if access == Access::Public {
        return next.run(req).await;
    }

    let authenticated = match jar.get(AUTH_COOKIE_NAME) {
        Some(cookie) => match crate::auth::verify_token(&state.config.auth, cookie.value()) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Invalid session token: {e}");
                false
            }
        },
        None => false,
    };

    match (access, authenticated) {
        (Access::Login, true) => Redirect::to("/").into_response(),
        (Access::Api, false) => AppError::Unauthorized.into_response(),
        (Access::Page, false) => Redirect::to("/auth").into_response(),
        _ => next.run(req).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_of_paths() {
        assert_eq!(Access::of("/", true), Access::Page);
        assert_eq!(Access::of("/planning", true), Access::Page);
        assert_eq!(Access::of("/auth", true), Access::Login);
        assert_eq!(Access::of("/api/auth", true), Access::Public);
        assert_eq!(Access::of("/api/auth/logout", true), Access::Public);
        assert_eq!(Access::of("/api/recipes", true), Access::Api);
        assert_eq!(Access::of("/api/recipes", false), Access::Public);
        assert_eq!(Access::of("/static/app.css", true), Access::Public);
        assert_eq!(Access::of("/_next/data", true), Access::Public);
        assert_eq!(Access::of("/favicon.ico", true), Access::Public);
        assert_eq!(Access::of("/health", true), Access::Public);
        assert_eq!(Access::of("/apiary", true), Access::Page);
    }
}

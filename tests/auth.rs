mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use helpers::{PASSWORD, body_string, setup_test_app, setup_test_app_with};
use serde_json::{Value, json};

fn login_request(password: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri("/api/auth")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"password": password}).to_string()))?)
}

#[tokio::test]
async fn test_login_sets_session_cookie() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app.send(login_request(PASSWORD)?).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_owned();
    assert!(cookie.starts_with("auth-token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));

    let body: Value = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(body["success"], true);

    Ok(())
}

#[tokio::test]
async fn test_login_with_wrong_password() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app.send(login_request("letmein")?).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body: Value = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Incorrect password");

    Ok(())
}

#[tokio::test]
async fn test_page_without_cookie_redirects_to_auth() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app
        .send(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/auth");

    Ok(())
}

#[tokio::test]
async fn test_forged_cookie_redirects_to_auth() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app
        .send(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "auth-token=authenticated")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.headers()[header::LOCATION], "/auth");

    Ok(())
}

#[tokio::test]
async fn test_auth_page_with_cookie_redirects_home() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app
        .send(
            Request::builder()
                .uri("/auth")
                .header(header::COOKIE, app.session_cookie()?)
                .body(Body::empty())?,
        )
        .await?;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/");

    Ok(())
}

#[tokio::test]
async fn test_pages_render_with_session() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app
        .send(Request::builder().uri("/auth").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await?.contains("password"));

    let response = app
        .send(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, app.session_cookie()?)
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await?.contains("Monday"));

    Ok(())
}

#[tokio::test]
async fn test_api_without_cookie_is_unauthorized() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app
        .send(Request::builder().uri("/api/recipes").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_api_open_when_protection_disabled() -> anyhow::Result<()> {
    let app = setup_test_app_with(|config| config.auth.protect_api = false).await?;

    let response = app
        .send(Request::builder().uri("/api/recipes").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_logout_clears_cookie() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header(header::COOKIE, app.session_cookie()?)
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_owned();
    assert!(cookie.starts_with("auth-token="));
    assert!(cookie.contains("Max-Age=0"));

    Ok(())
}

#[tokio::test]
async fn test_every_response_carries_hsts() -> anyhow::Result<()> {
    let app = setup_test_app().await?;

    let response = app
        .send(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::STRICT_TRANSPORT_SECURITY],
        "max-age=31536000; includeSubDomains"
    );

    Ok(())
}

#[tokio::test]
async fn test_force_https_redirects_plain_requests() -> anyhow::Result<()> {
    let app = setup_test_app_with(|config| config.server.force_https = true).await?;

    let response = app
        .send(
            Request::builder()
                .uri("/auth")
                .header(header::HOST, "plan.example.org")
                .header("x-forwarded-proto", "http")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://plan.example.org/auth"
    );

    let response = app
        .send(
            Request::builder()
                .uri("/auth")
                .header(header::HOST, "plan.example.org")
                .header("x-forwarded-proto", "https")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

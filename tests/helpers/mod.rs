//! Builds the full router on a fresh SQLite file and drives it with
//! one-shot requests.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;
use weekplate::config::{AuthConfig, Config, DatabaseConfig, ObservabilityConfig, ServerConfig};

pub const PASSWORD: &str = "open sesame";

pub struct TestApp {
    pub router: Router,
    pub config: Config,
    _dir: TempDir,
}

pub fn create_test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            force_https: false,
        },
        database: DatabaseConfig {
            url,
            max_connections: 1,
        },
        auth: AuthConfig {
            password: PASSWORD.to_string(),
            jwt_secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
            secure_cookie: true,
            protect_api: true,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    setup_test_app_with(|_| {}).await
}

pub async fn setup_test_app_with(configure: impl FnOnce(&mut Config)) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("weekplate.db").display());

    let mut config = create_test_config(url);
    configure(&mut config);

    let pool = weekplate::db::create_pool(&config.database.url, 1).await?;
    weekplate::db::run_migrations(&pool).await?;

    let state = weekplate::server::app_state(config.clone(), pool.clone(), pool);

    Ok(TestApp {
        router: weekplate::server::app(state),
        config,
        _dir: dir,
    })
}

impl TestApp {
    /// Value of a valid session cookie, as sent by the browser.
    pub fn session_cookie(&self) -> anyhow::Result<String> {
        let token = weekplate::auth::generate_token(&self.config.auth)?;

        Ok(format!("{}={token}", weekplate::auth::AUTH_COOKIE_NAME))
    }

    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<Response<Body>> {
        Ok(self.router.clone().oneshot(request).await?)
    }

    /// Sends an authenticated JSON request and returns status and body.
    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(u16, Value)> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, self.session_cookie()?);

        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value)?)
            }
            None => Body::empty(),
        };

        let response = self.send(builder.body(body)?).await?;
        let status = response.status().as_u16();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

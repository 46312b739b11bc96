use std::time::{SystemTime, UNIX_EPOCH};

use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

use crate::config::AuthConfig;

pub const AUTH_COOKIE_NAME: &str = "auth-token";
const SUBJECT: &str = "household";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

/// Compares digests so the time taken does not depend on how many leading
/// characters match.
pub fn verify_password(config: &AuthConfig, password: &str) -> bool {
    let expected = Sha3_256::digest(config.password.as_bytes());
    let given = Sha3_256::digest(password.as_bytes());

    expected
        .iter()
        .zip(given.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

pub fn generate_token(config: &AuthConfig) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        sub: SUBJECT.to_owned(),
        iat: now,
        exp: now + config.expiration_days as u64 * 24 * 60 * 60,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn verify_token(config: &AuthConfig, token: &str) -> anyhow::Result<Claims> {
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

pub fn build_cookie<'a>(config: &AuthConfig) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::days(config.expiration_days))
        .build())
}

pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build(AUTH_COOKIE_NAME).path("/").build()
}

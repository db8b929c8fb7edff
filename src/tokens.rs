use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::AppError;

const RESET_TOKEN_TTL_MINUTES: i64 = 10;

#[derive(Serialize)]
struct ResetClaims {
    #[serde(rename = "resetPassword")]
    reset_password: i32,
    exp: usize,
}

pub fn generate_reset_token(config: &AppConfig, user_id: i32) -> Result<String, AppError> {
    let exp = (Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES)).timestamp() as usize;
    let claims = ResetClaims {
        reset_password: user_id,
        exp,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?)
}

/// Tolerant verification: a malformed, expired, or foreign token is
/// simply not a reset token, never an error.
pub fn verify_reset_token(config: &AppConfig, token: &str) -> Option<i32> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);
    let claims = decode::<serde_json::Value>(token, &key, &validation)
        .ok()?
        .claims;
    claims
        .get("resetPassword")
        .and_then(|v| v.as_i64())
        .map(|id| id as i32)
}

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::session::SessionConfig;
use crate::modules::auth::model::{Claims, TokenKind};
use crate::utils::errors::AppError;

fn create_token(
    user_id: Uuid,
    email: &str,
    kind: TokenKind,
    expiry_secs: i64,
    config: &SessionConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + expiry_secs as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        typ: kind,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    config: &SessionConfig,
) -> Result<String, AppError> {
    create_token(
        user_id,
        email,
        TokenKind::Access,
        config.access_token_expiry,
        config,
    )
}

pub fn create_refresh_token(
    user_id: Uuid,
    email: &str,
    config: &SessionConfig,
) -> Result<String, AppError> {
    create_token(
        user_id,
        email,
        TokenKind::Refresh,
        config.refresh_token_expiry,
        config,
    )
}

/// Decodes and validates a token, additionally checking that it is of the
/// expected kind so a refresh token can never pass as an access token.
pub fn verify_token(
    token: &str,
    config: &SessionConfig,
    expected: TokenKind,
) -> Result<Claims, AppError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

    if claims.typ != expected {
        return Err(AppError::unauthorized("Invalid or expired token"));
    }

    Ok(claims)
}

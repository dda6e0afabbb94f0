//! JWT creation and verification for session tokens.
//!
//! Access tokens authenticate individual requests; refresh tokens mint new
//! access tokens. Each kind is signed with its own secret and expiry from
//! [`JwtConfig`].

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use studyref_config::JwtConfig;
use studyref_core::AppError;

use crate::claims::{AccessClaims, RefreshClaims};

/// Creates a short-lived access token carrying the user id as subject.
///
/// # Errors
///
/// Returns an error if token encoding fails (e.g. invalid secret key).
pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry) as usize;

    let claims = AccessClaims {
        sub: user_id.to_string(),
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.access_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("failed to create token: {}", e)))
}

/// Creates a long-lived refresh token, signed with the refresh secret.
pub fn create_refresh_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.refresh_token_expiry) as usize;

    let claims = RefreshClaims {
        sub: user_id.to_string(),
        exp,
        iat: now as usize,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("failed to create token: {}", e)))
}

/// Verifies an access token's signature and expiry.
///
/// Expired and malformed tokens both fail with a 401, with distinct messages
/// so callers can tell the cases apart.
pub fn verify_access_token(token: &str, jwt_config: &JwtConfig) -> Result<AccessClaims, AppError> {
    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.access_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized("token", "access token expired"),
        _ => AppError::unauthorized("token", "invalid access token"),
    })
}

/// Verifies a refresh token's signature and expiry.
pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshClaims, AppError> {
    decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized("token", "refresh token expired"),
        _ => AppError::unauthorized("token", "invalid refresh token"),
    })
}

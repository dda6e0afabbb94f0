//! JWT claim structures for session tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in access tokens.
///
/// The subject is the user id; no other identity data travels in the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// Claims embedded in refresh tokens.
///
/// Refresh tokens are long-lived and used to obtain new access tokens
/// without requiring the user to re-authenticate with their password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Unique token identifier (JWT ID) to ensure token uniqueness
    pub jti: String,
}

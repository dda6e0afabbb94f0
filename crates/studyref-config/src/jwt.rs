use std::env;

/// JWT configuration.
///
/// Access and refresh tokens are signed with distinct secrets so that
/// compromising one does not forge the other. Expiries are in seconds.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
    pub cookie_domain: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            access_secret: env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or_else(|_| "access-secret-change-in-production".to_string()),
            refresh_secret: env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or_else(|_| "refresh-secret-change-in-production".to_string()),
            access_token_expiry: env::var("ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(900), // 15 minutes
            refresh_token_expiry: env::var("REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 1 day
            cookie_domain: env::var("COOKIE_DOMAIN").unwrap_or_else(|_| "localhost".to_string()),
        }
    }
}

//! # Studyref Auth
//!
//! JWT claims and token utilities for the Studyref API.
//!
//! This crate provides:
//!
//! - [`claims`]: Claim structures for access and refresh tokens
//! - [`jwt`]: Token creation and verification
//!
//! # Token Types
//!
//! - **Access token** ([`AccessClaims`]): short-lived credential carrying the
//!   user id, sent as a `Bearer` header on authenticated requests.
//! - **Refresh token** ([`RefreshClaims`]): longer-lived credential delivered
//!   via cookie, used solely to mint new access tokens.
//!
//! The two token types are signed with distinct secrets. Tokens are stateless:
//! expiry is enforced lazily at verification time, and an access token cannot
//! be revoked before it expires.
//!
//! # Example
//!
//! ```ignore
//! use studyref_auth::{create_access_token, verify_access_token};
//! use studyref_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_access_token(user_id, &config)?;
//! let claims = verify_access_token(&token, &config)?;
//! println!("User ID: {}", claims.sub);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{AccessClaims, RefreshClaims};
pub use jwt::{
    create_access_token, create_refresh_token, verify_access_token, verify_refresh_token,
};

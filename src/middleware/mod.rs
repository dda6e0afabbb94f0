//! Middleware and extractors for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Authentication extractor that verifies the access token
//! - [`ownership`]: Reference ownership check for mutating routes
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the JWT and extracts the identity claims
//! 3. For reference mutations, [`ownership::ReferenceOwner`] additionally
//!    loads the reference and confirms the caller created it
//! 4. The handler executes if all checks pass

pub mod auth;
pub mod ownership;

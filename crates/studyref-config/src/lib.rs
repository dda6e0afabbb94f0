//! # Studyref Config
//!
//! Configuration types for the Studyref API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Access/refresh token secrets, expiries, and the refresh cookie domain
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: HTTP listener configuration
//!
//! Configuration is loaded once at startup into the application state and
//! passed explicitly to the components that need it; nothing reads the
//! environment after boot.
//!
//! # Example
//!
//! ```ignore
//! use studyref_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

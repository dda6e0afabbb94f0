//! # Studyref Core
//!
//! Core types, errors, and utilities for the Studyref API.
//!
//! This crate provides foundational types used throughout the Studyref application:
//!
//! - [`errors`]: Application error type with per-field details and envelope conversion
//! - [`response`]: The uniform `{code, status, data|errors}` response envelope
//! - [`pagination`]: Pagination parameters for list endpoints
//! - [`password`]: Secure password hashing and verification
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use studyref_core::errors::AppError;
//! use studyref_core::response::ApiResponse;
//! use studyref_core::password::{hash_password, verify_password};
//!
//! // Create an error with a per-field message
//! let error = AppError::not_found("id", "course not found");
//!
//! // Hash a password
//! let hash = hash_password("secure_password")?;
//!
//! // Wrap a payload in the response envelope
//! let response = ApiResponse::ok(payload);
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::PaginationParams;
pub use password::{hash_password, verify_password};
pub use response::ApiResponse;

//! The uniform response envelope.
//!
//! Every endpoint, success or failure, answers with the same shape:
//!
//! ```json
//! { "code": 200, "status": "OK", "data": ... }
//! { "code": 404, "status": "NOT_FOUND", "errors": { "id": "course not found" } }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Maps an HTTP status code to the envelope's status label.
pub fn status_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::OK => "OK",
        StatusCode::CREATED => "CREATED",
        StatusCode::BAD_REQUEST => "BAD_REQUEST",
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
        StatusCode::FORBIDDEN => "FORBIDDEN",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        _ => "INTERNAL_SERVER_ERROR",
    }
}

/// Success envelope wrapping a serializable payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            code: status.as_u16(),
            status: status_label(status),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }

    pub fn created(data: T) -> Self {
        Self::new(StatusCode::CREATED, data)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

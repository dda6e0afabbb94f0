use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

use crate::response::status_label;

/// Application error carrying an HTTP status and per-field messages.
///
/// Rendered as the standard error envelope:
/// `{ "code": 400, "status": "BAD_REQUEST", "errors": { "email": "duplicate value" } }`
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub errors: Vec<(String, String)>,
}

impl AppError {
    pub fn new(status: StatusCode, field: &str, message: &str) -> Self {
        Self {
            status,
            errors: vec![(field.to_string(), message.to_string())],
        }
    }

    pub fn bad_request(field: &str, message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, field, message)
    }

    pub fn unauthorized(field: &str, message: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, field, message)
    }

    pub fn forbidden(field: &str, message: &str) -> Self {
        Self::new(StatusCode::FORBIDDEN, field, message)
    }

    pub fn not_found(field: &str, message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, field, message)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let err = err.into();
        tracing::error!(error = %err, "internal server error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "server", "internal server error")
    }

    /// Collects every field failure reported by the `validator` crate into a
    /// single 400 response.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    (field.to_string(), message)
                })
            })
            .collect();

        Self {
            status: StatusCode::BAD_REQUEST,
            errors,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut errors = Map::new();
        for (field, message) in self.errors {
            errors.insert(field, Value::String(message));
        }

        let body = Json(json!({
            "code": self.status.as_u16(),
            "status": status_label(self.status),
            "errors": errors,
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_helper_constructors_set_status() {
        assert_eq!(
            AppError::bad_request("id", "invalid id").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("token", "invalid access token").status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::forbidden("access_token", "user not allowed").status,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_found("id", "course not found").status,
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_internal_hides_details() {
        let err = AppError::internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.errors[0].1, "internal server error");
    }

    #[test]
    fn test_from_validation_collects_fields() {
        #[derive(Validate)]
        struct Dto {
            #[validate(email(message = "email must be a valid email address"))]
            email: String,
            #[validate(length(min = 1, message = "full_name must not be empty"))]
            full_name: String,
        }

        let dto = Dto {
            email: "not-an-email".to_string(),
            full_name: String::new(),
        };
        let err = AppError::from_validation(&dto.validate().unwrap_err());

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = err.errors.iter().map(|(f, _)| f.as_str()).collect();
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"full_name"));
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A registered user. The password hash never leaves the service layer.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Serialize, FromRow)]
pub struct UserListItem {
    pub id: Uuid,
    pub full_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDto {
    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(
        length(min = 5, message = "password must be at least 5 characters"),
        custom(function = validate_password_strength)
    )]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Login/registration payload: the refresh token travels separately as a cookie.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub email: String,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| "!@#$%^&*".contains(c));

    if has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        let mut error = ValidationError::new("password_strength");
        error.message = Some(
            "password must contain at least one upper case character, lower case character, number, and special character"
                .into(),
        );
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto(password: &str) -> RegisterDto {
        RegisterDto {
            full_name: "Nasi Goreng".to_string(),
            email: "nasi@gmail.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_dto_valid() {
        assert!(register_dto("#1Gmail.com").validate().is_ok());
    }

    #[test]
    fn test_register_dto_rejects_weak_passwords() {
        // no special character
        assert!(register_dto("Abcdef1").validate().is_err());
        // no upper case
        assert!(register_dto("abcdef1!").validate().is_err());
        // no digit
        assert!(register_dto("Abcdefg!").validate().is_err());
        // too short
        assert!(register_dto("A1!b").validate().is_err());
    }

    #[test]
    fn test_register_dto_rejects_bad_email() {
        let dto = RegisterDto {
            full_name: "Nasi Goreng".to_string(),
            email: "not-an-email".to_string(),
            password: "#1Gmail.com".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_dto_requires_password() {
        let dto = LoginDto {
            email: "nasi@gmail.com".to_string(),
            password: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}

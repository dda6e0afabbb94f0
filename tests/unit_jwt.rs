use studyref_auth::jwt::{
    create_access_token, create_refresh_token, verify_access_token, verify_refresh_token,
};
use studyref_config::JwtConfig;
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "access_test_secret_key_for_testing".to_string(),
        refresh_secret: "refresh_test_secret_key_for_testing".to_string(),
        access_token_expiry: 900,
        refresh_token_expiry: 86400,
        cookie_domain: "localhost".to_string(),
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_access_token(user_id, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_verify_access_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, &jwt_config).unwrap();
    let claims = verify_access_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_verify_refresh_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_refresh_token(user_id, &jwt_config).unwrap();
    let claims = verify_refresh_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert!(!claims.jti.is_empty());
}

#[test]
fn test_verify_access_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_access_token("invalid.token.here", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_access_token_empty() {
    let jwt_config = get_test_jwt_config();

    let result = verify_access_token("", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_access_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        access_secret: "a_different_secret_key".to_string(),
        ..get_test_jwt_config()
    };

    let result = verify_access_token(&token, &wrong_jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_access_and_refresh_secrets_are_independent() {
    // A refresh token must not verify as an access token and vice versa,
    // since each kind is signed with its own secret.
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let access_token = create_access_token(user_id, &jwt_config).unwrap();
    let refresh_token = create_refresh_token(user_id, &jwt_config).unwrap();

    assert!(verify_access_token(&refresh_token, &jwt_config).is_err());
    assert!(verify_refresh_token(&access_token, &jwt_config).is_err());
}

#[test]
fn test_verify_access_token_expired() {
    // Issue a token already past its expiry (and past the default 60s leeway)
    let jwt_config = JwtConfig {
        access_token_expiry: -120,
        ..get_test_jwt_config()
    };
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, &jwt_config).unwrap();
    let result = verify_access_token(&token, &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_refresh_token_expired() {
    let jwt_config = JwtConfig {
        refresh_token_expiry: -120,
        ..get_test_jwt_config()
    };
    let user_id = Uuid::new_v4();

    let token = create_refresh_token(user_id, &jwt_config).unwrap();
    let result = verify_refresh_token(&token, &jwt_config);

    assert!(result.is_err());
}

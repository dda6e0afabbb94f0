use axum::extract::{Path, State};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::instrument;
use uuid::Uuid;

use studyref_auth::jwt::{create_access_token, create_refresh_token, verify_refresh_token};
use studyref_config::JwtConfig;
use studyref_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    LoginDto, MessageResponse, RefreshResponse, RegisterDto, SessionResponse, UserListItem,
};
use super::service::UserService;

/// Name of the cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "token";

fn refresh_cookie(token: String, jwt_config: &JwtConfig) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .domain(jwt_config.cookie_domain.clone())
        .path("/")
        .http_only(true)
        .build()
}

/// Registers a user and immediately opens a session: the refresh token is set
/// as a cookie and the access token returned in the body.
#[instrument(skip(state, jar, dto))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<(CookieJar, ApiResponse<Vec<SessionResponse>>), AppError> {
    let user = UserService::register(&state.db, dto).await?;

    let access_token = create_access_token(user.id, &state.jwt_config)?;
    let refresh_token = create_refresh_token(user.id, &state.jwt_config)?;

    let jar = jar.add(refresh_cookie(refresh_token, &state.jwt_config));
    let response = ApiResponse::created(vec![SessionResponse {
        email: user.email,
        access_token,
    }]);

    Ok((jar, response))
}

#[instrument(skip(state, jar, dto))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<(CookieJar, ApiResponse<Vec<SessionResponse>>), AppError> {
    let user = UserService::login(&state.db, dto).await?;

    let access_token = create_access_token(user.id, &state.jwt_config)?;
    let refresh_token = create_refresh_token(user.id, &state.jwt_config)?;

    let jar = jar.add(refresh_cookie(refresh_token, &state.jwt_config));
    let response = ApiResponse::ok(vec![SessionResponse {
        email: user.email,
        access_token,
    }]);

    Ok((jar, response))
}

/// The removal cookie carries the same domain and path as the issued one;
/// browsers key cookies on all three.
#[instrument(skip(state, jar))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiResponse<Vec<MessageResponse>>) {
    let jar = jar.remove(
        Cookie::build(REFRESH_COOKIE)
            .domain(state.jwt_config.cookie_domain.clone())
            .path("/")
            .build(),
    );
    let response = ApiResponse::ok(vec![MessageResponse {
        message: "success logout".to_string(),
    }]);

    (jar, response)
}

/// Mints a fresh access token from the refresh cookie.
///
/// The refresh token itself is not rotated; it stays valid until its expiry.
#[instrument(skip(state, jar))]
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<ApiResponse<RefreshResponse>, AppError> {
    let cookie = jar
        .get(REFRESH_COOKIE)
        .ok_or_else(|| AppError::unauthorized("cookie", "cookie is null"))?;

    let claims = verify_refresh_token(cookie.value(), &state.jwt_config)?;
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::unauthorized("token", "invalid refresh token"))?;

    let access_token = create_access_token(user_id, &state.jwt_config)?;

    Ok(ApiResponse::ok(RefreshResponse { access_token }))
}

#[instrument(skip(state))]
pub async fn get_all_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<ApiResponse<Vec<UserListItem>>, AppError> {
    let users = UserService::get_all_users(&state.db).await?;
    Ok(ApiResponse::ok(users))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<Vec<MessageResponse>>, AppError> {
    let id = id
        .parse::<Uuid>()
        .map_err(|_| AppError::bad_request("id", "invalid id"))?;

    UserService::delete_user(&state.db, id).await?;

    Ok(ApiResponse::ok(vec![MessageResponse {
        message: "success deleted user".to_string(),
    }]))
}

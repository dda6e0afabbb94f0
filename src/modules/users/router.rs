use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{delete_user, get_all_users, login, logout, refresh_token, register};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/refresh", get(refresh_token))
        .route("/", get(get_all_users))
        .route("/{id}", delete(delete_user))
}

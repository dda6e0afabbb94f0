use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::CorsLayer;

use studyref_core::ApiResponse;
use studyref_core::response::status_label;

use crate::logging::logging_middleware;
use crate::modules::courses::router::init_courses_router;
use crate::modules::references::router::init_references_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .nest("/user", init_users_router())
        .nest("/course", init_courses_router())
        .nest("/reference", init_references_router())
        .fallback(invalid_path)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

async fn health() -> ApiResponse<serde_json::Value> {
    ApiResponse::ok(json!({ "message": "server running" }))
}

async fn invalid_path() -> Response {
    let status = StatusCode::NOT_FOUND;
    let body = Json(json!({
        "code": status.as_u16(),
        "status": status_label(status),
        "errors": { "path": "invalid path" },
    }));
    (status, body).into_response()
}

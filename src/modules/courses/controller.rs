use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use studyref_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{Course, CourseDto};
use super::service::CourseService;

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    id.parse::<Uuid>()
        .map_err(|_| AppError::bad_request("id", "invalid id"))
}

#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<ApiResponse<Vec<Course>>, AppError> {
    let course = CourseService::create_course(&state.db, dto).await?;
    Ok(ApiResponse::created(vec![course]))
}

#[instrument(skip(state))]
pub async fn get_all_courses(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Course>>, AppError> {
    let courses = CourseService::get_all_courses(&state.db).await?;
    Ok(ApiResponse::ok(courses))
}

#[instrument(skip(state))]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Course>, AppError> {
    let id = parse_id(&id)?;
    let course = CourseService::get_course_by_id(&state.db, id).await?;
    Ok(ApiResponse::ok(course))
}

#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<ApiResponse<Vec<MessageResponse>>, AppError> {
    let id = parse_id(&id)?;
    CourseService::update_course(&state.db, id, dto).await?;

    Ok(ApiResponse::ok(vec![MessageResponse {
        message: "success updated course".to_string(),
    }]))
}

#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<Vec<MessageResponse>>, AppError> {
    let id = parse_id(&id)?;
    CourseService::delete_course(&state.db, id).await?;

    Ok(ApiResponse::ok(vec![MessageResponse {
        message: "success deleted course".to_string(),
    }]))
}

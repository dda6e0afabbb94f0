use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use studyref_core::{ApiResponse, AppError};

use crate::middleware::auth::AuthUser;
use crate::middleware::ownership::ReferenceOwner;
use crate::modules::users::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    Reference, ReferenceDto, ReferenceListData, ReferenceListParams, ReferenceWithRelations,
};
use super::service::ReferenceService;

#[instrument(skip(state, dto))]
pub async fn create_reference(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ReferenceDto>,
) -> Result<ApiResponse<Vec<Reference>>, AppError> {
    let created_by = auth_user.user_id()?;
    let reference = ReferenceService::create_reference(&state.db, dto, created_by).await?;

    Ok(ApiResponse::created(vec![reference]))
}

#[instrument(skip(state, query))]
pub async fn get_all_references(
    State(state): State<AppState>,
    query: Result<Query<ReferenceListParams>, QueryRejection>,
) -> Result<ApiResponse<ReferenceListData>, AppError> {
    let Query(params) =
        query.map_err(|_| AppError::bad_request("query", "invalid query parameters"))?;

    let data = ReferenceService::get_all_references(&state.db, params).await?;

    Ok(ApiResponse::ok(data))
}

#[instrument(skip(state))]
pub async fn get_reference_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ReferenceWithRelations>, AppError> {
    let id = id
        .parse::<Uuid>()
        .map_err(|_| AppError::bad_request("id", "invalid id"))?;

    let reference = ReferenceService::get_reference_by_id(&state.db, id).await?;

    Ok(ApiResponse::ok(reference))
}

/// Ownership is enforced by the [`ReferenceOwner`] extractor, which also
/// parses and resolves the path id.
#[instrument(skip(state, dto))]
pub async fn update_reference(
    State(state): State<AppState>,
    owner: ReferenceOwner,
    ValidatedJson(dto): ValidatedJson<ReferenceDto>,
) -> Result<ApiResponse<Vec<MessageResponse>>, AppError> {
    ReferenceService::update_reference(&state.db, owner.reference_id, dto).await?;

    Ok(ApiResponse::ok(vec![MessageResponse {
        message: "success updated reference".to_string(),
    }]))
}

#[instrument(skip(state))]
pub async fn delete_reference(
    State(state): State<AppState>,
    owner: ReferenceOwner,
) -> Result<ApiResponse<Vec<MessageResponse>>, AppError> {
    ReferenceService::delete_reference(&state.db, owner.reference_id).await?;

    Ok(ApiResponse::ok(vec![MessageResponse {
        message: "success deleted reference".to_string(),
    }]))
}

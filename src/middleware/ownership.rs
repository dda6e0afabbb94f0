use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use studyref_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::references::service::ReferenceService;
use crate::state::AppState;

/// Extractor that authenticates the caller and confirms they created the
/// reference named by the `:id` path parameter.
///
/// Runs strictly after authentication: the access token is verified first,
/// then the id is parsed, the reference loaded, and its creator compared to
/// the authenticated identity. Mismatch fails with 403.
#[derive(Debug, Clone)]
pub struct ReferenceOwner {
    pub user_id: Uuid,
    pub reference_id: Uuid,
}

impl FromRequestParts<AppState> for ReferenceOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let user_id = auth_user.user_id()?;

        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("id", "invalid id"))?;
        let reference_id = id
            .parse::<Uuid>()
            .map_err(|_| AppError::bad_request("id", "invalid id"))?;

        let created_by = ReferenceService::get_reference_owner(&state.db, reference_id).await?;

        if created_by != user_id {
            return Err(AppError::forbidden(
                "access_token",
                "user not allowed to edit this data",
            ));
        }

        Ok(ReferenceOwner {
            user_id,
            reference_id,
        })
    }
}

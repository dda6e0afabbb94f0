use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use studyref_core::PaginationParams;
use studyref_core::serde::deserialize_optional_uuid;

use crate::modules::courses::model::Course;

/// A reference as stored: a titled external link attached to exactly one
/// course, owned by its creator.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Reference {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    pub channel: String,
    pub course_id: Uuid,
    pub created_by: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReferenceDto {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "channel must not be empty"))]
    pub channel: String,
    #[validate(url(message = "link must be a valid URL"))]
    pub link: String,
    pub course_id: Uuid,
}

/// Optional filters for the reference listing.
#[derive(Debug, Deserialize)]
pub struct ReferenceListParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// A reference row denormalized with its author's full name and the course
/// subject, produced by joining against users and courses.
#[derive(Debug, Serialize, FromRow)]
pub struct ReferenceWithRelations {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    pub channel: String,
    pub author: String,
    pub subject: String,
}

/// Listing metadata returned alongside the rows.
#[derive(Debug, Serialize)]
pub struct ReferenceListInfo {
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceListData {
    pub references: Vec<ReferenceWithRelations>,
    pub info: ReferenceListInfo,
}

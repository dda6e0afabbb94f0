use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use studyref_core::AppError;

use crate::modules::courses::model::Course;

use super::model::{
    Reference, ReferenceDto, ReferenceListData, ReferenceListInfo, ReferenceListParams,
    ReferenceWithRelations,
};

const LIST_FROM: &str = "FROM course_references r
     JOIN users u ON u.id = r.created_by
     JOIN courses c ON c.id = r.course_id";

/// Escapes LIKE wildcards so a search term matches as a plain substring.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub struct ReferenceService;

impl ReferenceService {
    /// Creates a reference owned by `created_by`.
    ///
    /// The course must exist at write time; the store itself enforces no
    /// referential integrity between references and courses.
    #[instrument(skip(db, dto))]
    pub async fn create_reference(
        db: &PgPool,
        dto: ReferenceDto,
        created_by: Uuid,
    ) -> Result<Reference, AppError> {
        Self::ensure_course_exists(db, dto.course_id).await?;

        let reference = sqlx::query_as::<_, Reference>(
            "INSERT INTO course_references (title, link, channel, course_id, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, link, channel, course_id, created_by",
        )
        .bind(&dto.title)
        .bind(&dto.link)
        .bind(&dto.channel)
        .bind(dto.course_id)
        .bind(created_by)
        .fetch_one(db)
        .await?;

        Ok(reference)
    }

    /// Lists references denormalized with author name and course subject.
    ///
    /// References are joined against users and courses before the filters
    /// apply, then the requested page is selected. The total matching count
    /// and, when filtering by course, the parent course record are returned
    /// as listing info.
    #[instrument(skip(db))]
    pub async fn get_all_references(
        db: &PgPool,
        params: ReferenceListParams,
    ) -> Result<ReferenceListData, AppError> {
        let limit = params.pagination.limit();
        let skip = params.pagination.skip();

        let mut conditions: Vec<String> = Vec::new();
        if params.course_id.is_some() {
            conditions.push(format!("c.id = ${}", conditions.len() + 1));
        }
        let search_pattern = params
            .search
            .as_ref()
            .map(|s| format!("%{}%", escape_like(s)));
        if search_pattern.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!("(r.title ILIKE ${n} OR r.channel ILIKE ${n})"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) {LIST_FROM}{where_clause}");
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(course_id) = params.course_id {
            count_sql = count_sql.bind(course_id);
        }
        if let Some(pattern) = &search_pattern {
            count_sql = count_sql.bind(pattern);
        }
        let total = count_sql.fetch_one(db).await?;

        let list_query = format!(
            "SELECT r.id, r.title, r.link, r.channel, u.full_name AS author, c.subject
             {LIST_FROM}{where_clause}
             ORDER BY r.title
             LIMIT ${} OFFSET ${}",
            conditions.len() + 1,
            conditions.len() + 2,
        );
        let mut list_sql = sqlx::query_as::<_, ReferenceWithRelations>(&list_query);
        if let Some(course_id) = params.course_id {
            list_sql = list_sql.bind(course_id);
        }
        if let Some(pattern) = &search_pattern {
            list_sql = list_sql.bind(pattern);
        }
        let references = list_sql.bind(limit).bind(skip).fetch_all(db).await?;

        let course = match params.course_id {
            Some(course_id) => {
                sqlx::query_as::<_, Course>(
                    "SELECT id, subject, semester FROM courses WHERE id = $1",
                )
                .bind(course_id)
                .fetch_optional(db)
                .await?
            }
            None => None,
        };

        Ok(ReferenceListData {
            references,
            info: ReferenceListInfo { total, course },
        })
    }

    #[instrument(skip(db))]
    pub async fn get_reference_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<ReferenceWithRelations, AppError> {
        let query = format!(
            "SELECT r.id, r.title, r.link, r.channel, u.full_name AS author, c.subject
             {LIST_FROM}
             WHERE r.id = $1"
        );
        let reference = sqlx::query_as::<_, ReferenceWithRelations>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("id", "reference not found"))?;

        Ok(reference)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_reference(
        db: &PgPool,
        id: Uuid,
        dto: ReferenceDto,
    ) -> Result<(), AppError> {
        Self::ensure_course_exists(db, dto.course_id).await?;

        sqlx::query(
            "UPDATE course_references
             SET title = $1, link = $2, channel = $3, course_id = $4
             WHERE id = $5",
        )
        .bind(&dto.title)
        .bind(&dto.link)
        .bind(&dto.channel)
        .bind(dto.course_id)
        .bind(id)
        .execute(db)
        .await?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_reference(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM course_references WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("id", "reference not found"));
        }

        Ok(())
    }

    /// Returns the creator of a reference, for the ownership check.
    #[instrument(skip(db))]
    pub async fn get_reference_owner(db: &PgPool, id: Uuid) -> Result<Uuid, AppError> {
        let created_by =
            sqlx::query_scalar::<_, Uuid>("SELECT created_by FROM course_references WHERE id = $1")
                .bind(id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found("id", "reference not found"))?;

        Ok(created_by)
    }

    async fn ensure_course_exists(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("course_id", "course not found"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_terms_through() {
        assert_eq!(escape_like("bpmn"), "bpmn");
        assert_eq!(escape_like("BPMN Tutorial"), "BPMN Tutorial");
    }

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}

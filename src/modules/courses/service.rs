use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use studyref_core::AppError;

use super::model::{Course, CourseDto};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CourseDto) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (subject, semester)
             VALUES ($1, $2)
             RETURNING id, subject, semester",
        )
        .bind(&dto.subject)
        .bind(dto.semester)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_all_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses =
            sqlx::query_as::<_, Course>("SELECT id, subject, semester FROM courses ORDER BY subject")
                .fetch_all(db)
                .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, subject, semester FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("id", "course not found"))?;

        Ok(course)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(db: &PgPool, id: Uuid, dto: CourseDto) -> Result<(), AppError> {
        sqlx::query("UPDATE courses SET subject = $1, semester = $2 WHERE id = $3")
            .bind(&dto.subject)
            .bind(dto.semester)
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("id", "course not found"));
        }

        Ok(())
    }
}

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use studyref_core::AppError;
use studyref_core::password::{hash_password, verify_password};

use super::model::{LoginDto, RegisterDto, User, UserListItem};

pub struct UserService;

impl UserService {
    /// Creates a user, storing only the bcrypt hash of the password.
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterDto) -> Result<User, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request("email", "duplicate value"));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (full_name, email, password)
             VALUES ($1, $2, $3)
             RETURNING id, full_name, email",
        )
        .bind(&dto.full_name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    /// Checks credentials and returns the matching user.
    ///
    /// An unknown email and a wrong password fail differently (404 vs 401),
    /// matching the distinct cases the API documents.
    #[instrument(skip(db, dto))]
    pub async fn login(db: &PgPool, dto: LoginDto) -> Result<User, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            full_name: String,
            email: String,
            password: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, full_name, email, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("email", "email is not registered yet"))?;

        let is_valid = verify_password(&dto.password, &user.password)?;
        if !is_valid {
            return Err(AppError::unauthorized("password", "invalid password"));
        }

        Ok(User {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
        })
    }

    #[instrument(skip(db))]
    pub async fn get_all_users(db: &PgPool) -> Result<Vec<UserListItem>, AppError> {
        let users = sqlx::query_as::<_, UserListItem>(
            "SELECT id, full_name FROM users ORDER BY full_name",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("id", "user not found"));
        }

        Ok(())
    }
}

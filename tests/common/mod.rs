#[allow(unused_imports)]
use sqlx::PgPool;
use uuid::Uuid;

use studyref_core::password::hash_password;

/// Provisions the three tables on a fresh test database. The store carries
/// no foreign keys; referential integrity is the application's problem.
pub async fn setup_schema(pool: &PgPool) {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            full_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS courses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            subject TEXT NOT NULL,
            semester INT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS course_references (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            link TEXT NOT NULL,
            channel TEXT NOT NULL,
            course_id UUID NOT NULL,
            created_by UUID NOT NULL
        )",
    )
    .execute(pool)
    .await
    .unwrap();
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (full_name, email, password)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind("Test User")
    .bind(email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, subject: &str, semester: i32) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (subject, semester)
         VALUES ($1, $2)
         RETURNING id",
    )
    .bind(subject)
    .bind(semester)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_reference(
    pool: &PgPool,
    title: &str,
    course_id: Uuid,
    created_by: Uuid,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO course_references (title, link, channel, course_id, created_by)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(title)
    .bind("https://example.com/watch")
    .bind("Test Channel")
    .bind(course_id)
    .bind(created_by)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub subject: String,
    pub semester: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CourseDto {
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,
    #[validate(range(min = 1, max = 8, message = "semester must be between 1 and 8"))]
    pub semester: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_dto_valid() {
        let dto = CourseDto {
            subject: "Proyek Minor Sistem Informasi".to_string(),
            semester: 3,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_course_dto_semester_out_of_range() {
        for semester in [0, 9, -1] {
            let dto = CourseDto {
                subject: "Basis Data".to_string(),
                semester,
            };
            assert!(dto.validate().is_err(), "semester {} should fail", semester);
        }
    }

    #[test]
    fn test_course_dto_empty_subject() {
        let dto = CourseDto {
            subject: String::new(),
            semester: 1,
        };
        assert!(dto.validate().is_err());
    }
}

use db::models::{mark, student};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub student_number: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<student::Model> for StudentResponse {
    fn from(student: student::Model) -> Self {
        Self {
            id: student.id,
            name: student.name,
            student_number: student.student_number,
            created_at: student.created_at.to_rfc3339(),
            updated_at: student.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MarkResponse {
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub subject: String,
    pub score: f64,
    pub created_at: String,
}

impl From<mark::Model> for MarkResponse {
    fn from(mark: mark::Model) -> Self {
        Self {
            id: mark.id,
            student_id: mark.student_id,
            teacher_id: mark.teacher_id,
            subject: mark.subject,
            score: mark.score,
            created_at: mark.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 32, message = "Student number must be between 1 and 32 characters"))]
    pub student_number: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 32, message = "Student number must be between 1 and 32 characters"))]
    pub student_number: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMarkRequest {
    #[validate(length(min = 1, max = 100, message = "Subject is required"))]
    pub subject: String,
    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub score: f64,
}

/// True when `err` is a SQLite unique-constraint violation.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    err.to_string().contains("UNIQUE constraint failed")
}

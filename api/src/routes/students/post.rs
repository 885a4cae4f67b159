use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::students::common::{CreateStudentRequest, StudentResponse, is_unique_violation};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::student::Model as StudentModel;
use util::state::AppState;
use validator::Validate;

/// POST /api/students
///
/// ### Request Body
/// ```json
/// { "name": "Ann Wanjiru", "student_number": "KCB-001" }
/// ```
///
/// ### Responses
/// - `201 Created` with the new student
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` if the student number is taken
pub async fn create_student(
    State(app_state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<StudentResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    match StudentModel::create(app_state.db(), req.name.trim(), req.student_number.trim()).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student created successfully",
            )),
        ),
        Err(e) if is_unique_violation(&e) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error(
                "A student with this student number already exists",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

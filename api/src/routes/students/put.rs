use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::students::common::{StudentResponse, UpdateStudentRequest, is_unique_violation};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::{Entity as StudentEntity, Model as StudentModel};
use sea_orm::EntityTrait;
use util::state::AppState;
use validator::Validate;

/// PUT /api/students/{student_id}
///
/// Partial update: omitted fields are left unchanged.
///
/// ### Responses
/// - `200 OK` with the updated student
/// - `400 Bad Request` on validation failure or an empty body
/// - `404 Not Found` if the student does not exist
/// - `409 Conflict` if the new student number is taken
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<StudentResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    if req.name.is_none() && req.student_number.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("At least one field must be provided")),
        );
    }

    match StudentEntity::find_by_id(student_id).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Student not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {e}"))),
            );
        }
    }

    match StudentModel::update(
        db,
        student_id,
        req.name.as_deref().map(str::trim),
        req.student_number.as_deref().map(str::trim),
    )
    .await
    {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student updated successfully",
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

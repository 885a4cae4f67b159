use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::Model as StudentModel;
use util::state::AppState;

/// DELETE /api/students/{student_id}
///
/// Deletes the student together with their marks.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the student does not exist
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    match StudentModel::delete(app_state.db(), student_id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Student not found")),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Student deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

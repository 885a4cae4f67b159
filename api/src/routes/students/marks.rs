use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::students::common::{CreateMarkRequest, MarkResponse};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{mark::Model as MarkModel, student::Entity as StudentEntity};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use util::state::AppState;
use validator::Validate;

async fn student_exists(db: &DatabaseConnection, student_id: i64) -> Result<bool, DbErr> {
    Ok(StudentEntity::find_by_id(student_id).one(db).await?.is_some())
}

/// GET /api/students/{student_id}/marks
///
/// Marks in the order they were recorded.
pub async fn list_marks(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match student_exists(db, student_id).await {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Vec<MarkResponse>>::error("Student not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {e}"))),
            );
        }
    }

    match MarkModel::for_student(db, student_id).await {
        Ok(marks) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                marks.into_iter().map(MarkResponse::from).collect(),
                "Marks retrieved successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

/// POST /api/students/{student_id}/marks
///
/// Records a mark with the caller as teacher.
///
/// ### Request Body
/// ```json
/// { "subject": "Mathematics", "score": 87.5 }
/// ```
///
/// ### Responses
/// - `201 Created` with the new mark
/// - `400 Bad Request` if the subject is empty or the score is outside 0-100
/// - `404 Not Found` if the student does not exist
pub async fn create_mark(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateMarkRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<MarkResponse>::error(format_validation_errors(&e))),
        );
    }

    let subject = req.subject.trim();
    if subject.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Subject is required")),
        );
    }

    match student_exists(db, student_id).await {
        Ok(true) => {}
        Ok(false) => {
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

    match MarkModel::create(db, student_id, Some(claims.sub), subject, req.score).await {
        Ok(mark) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                MarkResponse::from(mark),
                "Mark recorded successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::reports::common::{CreateReportRequest, ReportResponse};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use db::models::report_task::{Model as ReportModel, NewReportTask};
use serde_json::json;
use util::state::AppState;
use validator::Validate;

/// POST /api/reports
///
/// Creates a draft report owned by the caller. Drafts carry no marks.
///
/// ### Request Body
/// ```json
/// { "title": "Form 3 mid-term notes", "description": "Optional" }
/// ```
///
/// ### Responses
/// - `201 Created` with `metadata = { "status": "draft", "createdAt": "<rfc3339>" }`
/// - `400 Bad Request` if the title is empty or longer than 200 characters
pub async fn create_report(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateReportRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ReportResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let title = req.title.trim();
    if title.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Title must be between 1 and 200 characters")),
        );
    }

    let description = req
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_owned);

    let draft = NewReportTask {
        title: title.to_owned(),
        description,
        created_by: claims.sub,
        metadata: json!({
            "status": "draft",
            "createdAt": Utc::now().to_rfc3339(),
        }),
        mark_ids: Vec::new(),
        generation_run: None,
    };

    match ReportModel::create_with_marks(app_state.db(), draft).await {
        Ok(report) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ReportResponse::from(report),
                "Report created successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

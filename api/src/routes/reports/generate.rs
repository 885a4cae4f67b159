//! `POST /api/reports/generate`: batch term-report generation.
//!
//! Unlike the rest of the API this endpoint answers with a bare JSON body
//! instead of the `ApiResponse` envelope:
//!
//! | Status | Body |
//! |--------|------|
//! | 200 | `{ "success": true, "count": 45, "firstReport": { ... } }` |
//! | 401 | `{ "error": "Unauthorized" }` |
//! | 404 | `{ "error": "No students found" }` |
//! | 500 | `{ "error": "Failed to generate reports", "details": "<cause>" }` |

use crate::auth::claims::AuthUser;
use crate::routes::reports::common::ReportResponse;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::report_service::{ReportBatchConfig, ReportError, ReportGenerator};
use services::report_store::SeaOrmReportStore;
use util::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportsResponse {
    pub success: bool,
    pub count: usize,
    pub first_report: Option<ReportResponse>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReportsError {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GenerateReportsError {
    fn response(status: StatusCode, error: &'static str, details: Option<String>) -> Response {
        (status, Json(Self { error, details })).into_response()
    }
}

fn error_response(err: ReportError) -> Response {
    match err {
        ReportError::Unauthorized => {
            GenerateReportsError::response(StatusCode::UNAUTHORIZED, "Unauthorized", None)
        }
        ReportError::NoStudents => {
            GenerateReportsError::response(StatusCode::NOT_FOUND, "No students found", None)
        }
        other => GenerateReportsError::response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate reports",
            Some(other.to_string()),
        ),
    }
}

/// Generates a term report for each of the oldest students.
///
/// The caller must hold `REPORT_ADMIN`. A missing or invalid token is
/// reported the same way as a missing capability.
pub async fn generate_reports(
    State(app_state): State<AppState>,
    auth: Result<AuthUser, (StatusCode, &'static str)>,
) -> Response {
    let Ok(AuthUser(claims)) = auth else {
        return error_response(ReportError::Unauthorized);
    };

    let generator = ReportGenerator::new(
        SeaOrmReportStore::new(app_state.db_clone()),
        ReportBatchConfig::from_app_config(),
    );

    match generator.generate(claims.sub).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(GenerateReportsResponse {
                success: true,
                count: outcome.count(),
                first_report: outcome
                    .first_report()
                    .map(|generated| ReportResponse::from(generated.report.clone())),
            }),
        )
            .into_response(),
        Err(err) => {
            if let ReportError::Persistence(cause) = &err {
                tracing::error!(user_id = claims.sub, error = %cause, "Report generation failed");
            }
            error_response(err)
        }
    }
}

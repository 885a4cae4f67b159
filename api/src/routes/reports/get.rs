use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::reports::common::{CreatorResponse, ReportDetailResponse, ReportResponse};
use crate::routes::students::common::MarkResponse;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{
    report_task::{Column as ReportColumn, Entity as ReportEntity, Model as ReportModel},
    user::Entity as UserEntity,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListReportsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
}

#[derive(Debug, Serialize, Default)]
pub struct ReportsListResponse {
    pub reports: Vec<ReportResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/reports
///
/// Paginated reports, newest first.
pub async fn list_reports(
    State(app_state): State<AppState>,
    Query(query): Query<ListReportsQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<ReportsListResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(20);

    let paginator = ReportEntity::find()
        .order_by_desc(ReportColumn::CreatedAt)
        .order_by_desc(ReportColumn::Id)
        .paginate(app_state.db(), per_page);

    let result = async {
        let total = paginator.num_items().await?;
        let reports = paginator.fetch_page(page - 1).await?;
        Ok::<_, DbErr>((total, reports))
    }
    .await;

    match result {
        Ok((total, reports)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ReportsListResponse {
                    reports: reports.into_iter().map(ReportResponse::from).collect(),
                    page,
                    per_page,
                    total,
                },
                "Reports retrieved successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

/// GET /api/reports/{report_id}
///
/// Report with its linked marks (insertion order) and creator.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if no report has this id
pub async fn get_report(
    State(app_state): State<AppState>,
    Path(report_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let result = async {
        let Some(report) = ReportEntity::find_by_id(report_id).one(db).await? else {
            return Ok(None);
        };
        let marks = ReportModel::linked_marks(db, report.id).await?;
        let creator = UserEntity::find_by_id(report.created_by).one(db).await?;

        Ok::<_, DbErr>(Some(ReportDetailResponse {
            report: report.into(),
            marks: marks.into_iter().map(MarkResponse::from).collect(),
            creator: creator.map(CreatorResponse::from),
        }))
    }
    .await;

    match result {
        Ok(Some(detail)) => (
            StatusCode::OK,
            Json(ApiResponse::success(detail, "Report retrieved successfully")),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ReportDetailResponse>::error("Report not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

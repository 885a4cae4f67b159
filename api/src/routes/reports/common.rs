use crate::routes::students::common::MarkResponse;
use db::models::{report_task, user};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct ReportResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_by: i64,
    /// Report summary, or draft status for hand-written reports.
    pub metadata: serde_json::Value,
    pub generation_run: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<report_task::Model> for ReportResponse {
    fn from(report: report_task::Model) -> Self {
        Self {
            id: report.id,
            title: report.title,
            description: report.description,
            created_by: report.created_by,
            metadata: report.metadata,
            generation_run: report.generation_run,
            created_at: report.created_at.to_rfc3339(),
            updated_at: report.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CreatorResponse {
    pub id: i64,
    pub name: String,
    pub profile_picture: Option<String>,
}

impl From<user::Model> for CreatorResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            profile_picture: user.profile_picture,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ReportDetailResponse {
    #[serde(flatten)]
    pub report: ReportResponse,
    pub marks: Vec<MarkResponse>,
    pub creator: Option<CreatorResponse>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReportRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    pub description: Option<String>,
}

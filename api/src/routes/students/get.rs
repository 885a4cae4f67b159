use crate::response::ApiResponse;
use crate::routes::common::{format_validation_errors, sort_fields};
use crate::routes::students::common::StudentResponse;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::{Column as StudentColumn, Entity as StudentEntity};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListStudentsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
    /// Case-insensitive match on name or student number.
    pub query: Option<String>,
    /// Comma separated fields, `-` prefix for descending: `name`, `student_number`, `created_at`.
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct StudentsListResponse {
    pub students: Vec<StudentResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/students
///
/// Paginated student listing. Without `sort`, students come back in creation order.
///
/// ### Responses
/// - `200 OK` with `{ students, page, per_page, total }`
/// - `400 Bad Request` on invalid pagination
/// - `500 Internal Server Error` on database failure
pub async fn list_students(
    State(app_state): State<AppState>,
    Query(query): Query<ListStudentsQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<StudentsListResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(20);

    let mut condition = Condition::all();
    if let Some(q) = query.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        condition = condition.add(
            Condition::any()
                .add(StudentColumn::Name.contains(q))
                .add(StudentColumn::StudentNumber.contains(q)),
        );
    }

    let mut query_builder = StudentEntity::find().filter(condition);

    match query.sort.as_deref() {
        Some(sort) => {
            for (field, desc) in sort_fields(sort) {
                let column = match field {
                    "name" => StudentColumn::Name,
                    "student_number" => StudentColumn::StudentNumber,
                    "created_at" => StudentColumn::CreatedAt,
                    _ => continue,
                };
                query_builder = if desc {
                    query_builder.order_by_desc(column)
                } else {
                    query_builder.order_by_asc(column)
                };
            }
            query_builder = query_builder.order_by_asc(StudentColumn::Id);
        }
        None => {
            query_builder = query_builder
                .order_by_asc(StudentColumn::CreatedAt)
                .order_by_asc(StudentColumn::Id);
        }
    }

    let paginator = query_builder.paginate(db, per_page);
    let result = async {
        let total = paginator.num_items().await?;
        let students = paginator.fetch_page(page - 1).await?;
        Ok::<_, sea_orm::DbErr>((total, students))
    }
    .await;

    match result {
        Ok((total, students)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentsListResponse {
                    students: students.into_iter().map(StudentResponse::from).collect(),
                    page,
                    per_page,
                    total,
                },
                "Students retrieved successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

/// GET /api/students/{student_id}
///
/// ### Responses
/// - `200 OK` with the student
/// - `404 Not Found` if no student has this id
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    match StudentEntity::find_by_id(student_id).one(app_state.db()).await {
        Ok(Some(student)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<StudentResponse>::error("Student not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<StudentResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}

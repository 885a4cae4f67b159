//! # Students Routes Module
//!
//! Routes nested under `/api/students`, all requiring authentication:
//!
//! - `GET /students` → `list_students`
//! - `POST /students` → `create_student`
//! - `GET /students/{student_id}` → `get_student`
//! - `PUT /students/{student_id}` → `update_student`
//! - `DELETE /students/{student_id}` → `delete_student`
//! - `GET /students/{student_id}/marks` → `list_marks`
//! - `POST /students/{student_id}/marks` → `create_mark`

use axum::{Router, routing::get};
use delete::delete_student;
use get::{get_student, list_students};
use marks::{create_mark, list_marks};
use post::create_student;
use put::update_student;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod marks;
pub mod post;
pub mod put;

pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{student_id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/{student_id}/marks", get(list_marks).post(create_mark))
}

//! # Reports Routes Module
//!
//! Routes nested under `/api/reports`:
//!
//! - `GET /reports` → `list_reports` (authenticated)
//! - `POST /reports` → `create_report` (authenticated, creates a draft)
//! - `GET /reports/{report_id}` → `get_report` (authenticated)
//! - `POST /reports/generate` → `generate_reports` (requires `REPORT_ADMIN`)
//!
//! `generate_reports` authenticates by itself and is added after the guard layer.

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use generate::generate_reports;
use get::{get_report, list_reports};
use post::create_report;
use util::state::AppState;

pub mod common;
pub mod generate;
pub mod get;
pub mod post;

pub fn reports_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(create_report))
        .route("/{report_id}", get(get_report))
        .route_layer(from_fn(allow_authenticated))
        .route("/generate", post(generate_reports))
}

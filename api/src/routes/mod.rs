//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/students` → students and their marks (authenticated)
//! - `/reports` → report listing, drafts and batch generation

use crate::auth::guards::allow_authenticated;
use crate::routes::{health::health_routes, reports::reports_routes, students::students_routes};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod common;
pub mod health;
pub mod reports;
pub mod students;

/// Builds the `/api` router with its state resolved.
///
/// `/reports` applies its own guard so that `/reports/generate` can answer
/// authentication failures in its dedicated error format.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/students",
            students_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest("/reports", reports_routes())
        .with_state(app_state)
}

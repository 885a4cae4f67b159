use api::auth::generate_jwt;
use api::routes::routes;
use axum::{Router, body::to_bytes, response::Response};
use db::test_utils::setup_test_db;
use serde_json::Value;
use util::{config::AppConfig, state::AppState};

pub const TEST_JWT_SECRET: &str = "kcb-reports-test-secret";

/// Router mounted under `/api` over a fresh in-memory database.
///
/// Resets the global config to test values: throttle off, default chunking.
pub async fn make_test_app() -> (Router, AppState) {
    AppConfig::set_jwt_secret(TEST_JWT_SECRET);
    AppConfig::set_jwt_duration_minutes(60);
    AppConfig::set_report_student_limit(120);
    AppConfig::set_report_chunk_size(20);
    AppConfig::set_report_throttle_ms(0);

    let app_state = AppState::new(setup_test_db().await);
    let router = Router::new().nest("/api", routes(app_state.clone()));

    (router, app_state)
}

pub fn bearer(user_id: i64) -> String {
    let (token, _) = generate_jwt(user_id).expect("Failed to sign test token");
    format!("Bearer {token}")
}

pub async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

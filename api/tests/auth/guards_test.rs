#[cfg(test)]
mod tests {
    use api::auth::{AuthUser, guards::allow_authenticated};
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn,
        routing::get,
    };
    use serial_test::serial;
    use tower::ServiceExt;

    use crate::helpers::{bearer, json_body, make_test_app};

    async fn whoami(Extension(AuthUser(claims)): Extension<AuthUser>) -> String {
        claims.sub.to_string()
    }

    fn guarded() -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(from_fn(allow_authenticated))
    }

    #[tokio::test]
    #[serial]
    async fn guard_inserts_authenticated_user() {
        let _ = make_test_app().await;

        let req = Request::builder()
            .uri("/whoami")
            .header("Authorization", bearer(17))
            .body(Body::empty())
            .unwrap();
        let response = guarded().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"17");
    }

    #[tokio::test]
    #[serial]
    async fn guard_rejects_garbage_token() {
        let _ = make_test_app().await;

        let req = Request::builder()
            .uri("/whoami")
            .header("Authorization", "Bearer not-a-jwt")
            .body(Body::empty())
            .unwrap();
        let response = guarded().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication required");
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::user::Model as UserModel;
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    fn post(auth: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/reports")
            .header("Authorization", auth)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn draft_is_created_for_caller() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();

        let response = app
            .oneshot(post(
                &bearer(teacher.id),
                json!({ "title": "  Form 3 notes ", "description": "Mid-term" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_body(response).await;
        assert_eq!(json["data"]["title"], "Form 3 notes");
        assert_eq!(json["data"]["description"], "Mid-term");
        assert_eq!(json["data"]["created_by"], teacher.id);
        assert_eq!(json["data"]["metadata"]["status"], "draft");
        assert!(json["data"]["metadata"]["createdAt"].is_string());
        assert!(json["data"]["generation_run"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn title_must_be_between_1_and_200_characters() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        let auth = bearer(teacher.id);

        for title in [String::new(), "   ".to_string(), "x".repeat(201)] {
            let response = app
                .clone()
                .oneshot(post(&auth, json!({ "title": title })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}

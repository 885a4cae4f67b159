#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{student::Model as StudentModel, user::Model as UserModel};
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    fn post_mark(uri: &str, auth: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Authorization", auth)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn recorded_marks_list_in_insertion_order_with_caller_as_teacher() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        let student = StudentModel::create(state.db(), "Ann", "KCB-001").await.unwrap();
        let auth = bearer(teacher.id);
        let uri = format!("/api/students/{}/marks", student.id);

        for (subject, score) in [("Math", 95.0), ("Eng", 40.0), ("Sci", 95.0)] {
            let response = app
                .clone()
                .oneshot(post_mark(&uri, &auth, json!({ "subject": subject, "score": score })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let req = Request::builder()
            .uri(&uri)
            .header("Authorization", &auth)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        let marks = json["data"].as_array().unwrap();
        let subjects: Vec<&str> = marks.iter().map(|m| m["subject"].as_str().unwrap()).collect();
        assert_eq!(subjects, vec!["Math", "Eng", "Sci"]);
        assert_eq!(marks[0]["teacher_id"], teacher.id);
    }

    #[tokio::test]
    #[serial]
    async fn invalid_marks_are_rejected() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        let student = StudentModel::create(state.db(), "Ann", "KCB-001").await.unwrap();
        let auth = bearer(teacher.id);
        let uri = format!("/api/students/{}/marks", student.id);

        for body in [
            json!({ "subject": "Math", "score": 100.5 }),
            json!({ "subject": "Math", "score": -1 }),
            json!({ "subject": "   ", "score": 50 }),
        ] {
            let response = app
                .clone()
                .oneshot(post_mark(&uri, &auth, body.clone()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        }

        let response = app
            .oneshot(post_mark(
                "/api/students/9999/marks",
                &auth,
                json!({ "subject": "Math", "score": 50 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

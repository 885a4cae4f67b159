#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        mark::Model as MarkModel, student::Model as StudentModel, user::Model as UserModel,
    };
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header("Authorization", auth);
        }
        match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    #[tokio::test]
    #[serial]
    async fn listing_requires_authentication() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(request("GET", "/api/students", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication required");
    }

    #[tokio::test]
    #[serial]
    async fn list_is_paginated_and_searchable() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        for (name, number) in [("Ann", "KCB-001"), ("Ben", "KCB-002"), ("Annette", "KCB-003")] {
            StudentModel::create(state.db(), name, number).await.unwrap();
        }
        let auth = bearer(teacher.id);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/students?per_page=2", Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["total"], 3);
        assert_eq!(json["data"]["students"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"]["students"][0]["name"], "Ann");

        let response = app
            .clone()
            .oneshot(request("GET", "/api/students?query=ann&sort=-name", Some(&auth), None))
            .await
            .unwrap();
        let json = json_body(response).await;
        let names: Vec<&str> = json["data"]["students"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Annette", "Ann"]);

        let response = app
            .oneshot(request("GET", "/api/students?per_page=0", Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn create_rejects_duplicates_and_blank_names() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        let auth = bearer(teacher.id);

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/students",
                Some(&auth),
                Some(json!({ "name": "Ann", "student_number": "KCB-001" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_body(response).await;
        assert_eq!(json["data"]["student_number"], "KCB-001");

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/students",
                Some(&auth),
                Some(json!({ "name": "Other Ann", "student_number": "KCB-001" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .oneshot(request(
                "POST",
                "/api/students",
                Some(&auth),
                Some(json!({ "name": "", "student_number": "KCB-002" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Name must be between 1 and 100 characters");
    }

    #[tokio::test]
    #[serial]
    async fn get_update_and_delete_by_id() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        let student = StudentModel::create(state.db(), "Ann", "KCB-001").await.unwrap();
        MarkModel::create(state.db(), student.id, Some(teacher.id), "Math", 70.0)
            .await
            .unwrap();
        let auth = bearer(teacher.id);
        let uri = format!("/api/students/{}", student.id);

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &uri,
                Some(&auth),
                Some(json!({ "name": "Ann Wanjiru" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["name"], "Ann Wanjiru");
        assert_eq!(json["data"]["student_number"], "KCB-001");

        let response = app
            .clone()
            .oneshot(request("DELETE", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(MarkModel::for_student(state.db(), student.id).await.unwrap().is_empty());

        let response = app
            .clone()
            .oneshot(request("GET", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(request("DELETE", &uri, Some(&auth), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        admin_role::Capability, mark::Model as MarkModel, report_task,
        student::Model as StudentModel, user::Model as UserModel,
    };
    use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    fn generate(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/api/reports/generate");
        if let Some(auth) = auth {
            builder = builder.header("Authorization", auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn report_admin(db: &DatabaseConnection) -> UserModel {
        let admin = UserModel::create(db, "Principal", "principal@kcb.test").await.unwrap();
        UserModel::grant_capability(db, admin.id, Capability::ReportAdmin)
            .await
            .unwrap();
        admin
    }

    async fn report_count(db: &DatabaseConnection) -> u64 {
        report_task::Entity::find().count(db).await.unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn missing_token_is_unauthorized() {
        let (app, state) = make_test_app().await;
        StudentModel::create(state.db(), "Ann", "KCB-001").await.unwrap();

        let response = app.oneshot(generate(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = json_body(response).await;
        assert_eq!(json, serde_json::json!({ "error": "Unauthorized" }));
        assert_eq!(report_count(state.db()).await, 0);
    }

    #[tokio::test]
    #[serial]
    async fn caller_without_report_admin_is_unauthorized_and_writes_nothing() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        StudentModel::create(state.db(), "Ann", "KCB-001").await.unwrap();

        let response = app.oneshot(generate(Some(&bearer(teacher.id)))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Unauthorized");
        assert_eq!(report_count(state.db()).await, 0);
    }

    #[tokio::test]
    #[serial]
    async fn no_students_is_not_found() {
        let (app, state) = make_test_app().await;
        let admin = report_admin(state.db()).await;

        let response = app.oneshot(generate(Some(&bearer(admin.id)))).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json, serde_json::json!({ "error": "No students found" }));
    }

    #[tokio::test]
    #[serial]
    async fn generates_one_report_per_student() {
        let (app, state) = make_test_app().await;
        let db = state.db();
        let admin = report_admin(db).await;
        let ann = StudentModel::create(db, "Ann", "KCB-001").await.unwrap();
        for (subject, score) in [("Math", 95.0), ("Eng", 40.0), ("Sci", 95.0)] {
            MarkModel::create(db, ann.id, Some(admin.id), subject, score).await.unwrap();
        }
        for n in 2..=45 {
            StudentModel::create(db, &format!("Student {n}"), &format!("KCB-{n:03}"))
                .await
                .unwrap();
        }

        let response = app.oneshot(generate(Some(&bearer(admin.id)))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 45);

        let first = &json["firstReport"];
        assert_eq!(first["title"], "Term Report - Ann");
        assert_eq!(first["description"], "Comprehensive performance report for Ann");
        assert_eq!(first["created_by"], admin.id);
        assert_eq!(first["metadata"]["averageScore"], "76.67");
        assert_eq!(first["metadata"]["performance"], "Very Good");
        assert_eq!(first["metadata"]["grade"], "B");
        assert_eq!(first["metadata"]["highestSubject"], "Math");
        assert_eq!(first["metadata"]["lowestSubject"], "Eng");
        assert_eq!(first["metadata"]["scoreDistribution"]["91-100"], 2);

        assert_eq!(report_count(db).await, 45);
    }

    #[tokio::test]
    #[serial]
    async fn student_limit_caps_the_run() {
        let (app, state) = make_test_app().await;
        AppConfig::set_report_student_limit(3);
        AppConfig::set_report_chunk_size(2);
        let admin = report_admin(state.db()).await;
        for n in 1..=5 {
            StudentModel::create(state.db(), &format!("Student {n}"), &format!("KCB-{n:03}"))
                .await
                .unwrap();
        }

        let response = app.oneshot(generate(Some(&bearer(admin.id)))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["count"], 3);
        assert_eq!(report_count(state.db()).await, 3);
    }

    #[tokio::test]
    #[serial]
    async fn persistence_failure_is_reported_with_details() {
        let (app, state) = make_test_app().await;
        let db = state.db();
        let admin = report_admin(db).await;
        let ann = StudentModel::create(db, "Ann", "KCB-001").await.unwrap();
        MarkModel::create(db, ann.id, Some(admin.id), "Math", 80.0).await.unwrap();
        db.execute_unprepared("DROP TABLE report_task_marks").await.unwrap();

        let response = app.oneshot(generate(Some(&bearer(admin.id)))).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Failed to generate reports");
        assert!(
            json["details"].as_str().unwrap().contains("report_task_marks"),
            "details: {}",
            json["details"]
        );
        assert_eq!(report_count(db).await, 0);
    }
}

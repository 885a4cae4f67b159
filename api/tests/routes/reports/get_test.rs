#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, json_body, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        mark::Model as MarkModel,
        report_task::{Model as ReportModel, NewReportTask},
        student::Model as StudentModel,
        user::Model as UserModel,
    };
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    fn get(uri: &str, auth: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("Authorization", auth)
            .body(Body::empty())
            .unwrap()
    }

    fn draft(title: &str, created_by: i64, mark_ids: Vec<i64>) -> NewReportTask {
        NewReportTask {
            title: title.into(),
            description: None,
            created_by,
            metadata: json!({ "status": "draft" }),
            mark_ids,
            generation_run: None,
        }
    }

    #[tokio::test]
    #[serial]
    async fn list_is_newest_first() {
        let (app, state) = make_test_app().await;
        let teacher = UserModel::create(state.db(), "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        for title in ["First", "Second", "Third"] {
            ReportModel::create_with_marks(state.db(), draft(title, teacher.id, vec![]))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(get("/api/reports?per_page=2", &bearer(teacher.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["total"], 3);
        let titles: Vec<&str> = json["data"]["reports"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Third", "Second"]);
    }

    #[tokio::test]
    #[serial]
    async fn detail_includes_marks_and_creator() {
        let (app, state) = make_test_app().await;
        let db = state.db();
        let teacher = UserModel::create(db, "Mwalimu", "mwalimu@kcb.test").await.unwrap();
        let student = StudentModel::create(db, "Ann", "KCB-001").await.unwrap();
        let math = MarkModel::create(db, student.id, Some(teacher.id), "Math", 88.0).await.unwrap();
        let eng = MarkModel::create(db, student.id, Some(teacher.id), "Eng", 61.0).await.unwrap();
        let report = ReportModel::create_with_marks(db, draft("Ann", teacher.id, vec![eng.id, math.id]))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get(&format!("/api/reports/{}", report.id), &bearer(teacher.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["title"], "Ann");
        assert_eq!(json["data"]["creator"]["name"], "Mwalimu");
        assert!(json["data"]["creator"]["profile_picture"].is_null());
        let subjects: Vec<&str> = json["data"]["marks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["subject"].as_str().unwrap())
            .collect();
        assert_eq!(subjects, vec!["Math", "Eng"]);

        let response = app
            .oneshot(get("/api/reports/9999", &bearer(teacher.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn listing_requires_authentication() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .uri("/api/reports")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

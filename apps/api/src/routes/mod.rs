pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/v1/jobs", get(jobs::handle_job_feed))
        .route("/api/v1/jobs/:id/publish", post(jobs::handle_publish_job))
        .route(
            "/api/v1/jobs/:id/applicants",
            get(jobs::handle_ranked_applicants),
        )
        // Matching API
        .route("/api/v1/matching/classify", post(matching::handle_classify))
        .route("/api/v1/matching/score", post(matching::handle_score))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::matching::match_scoring::KeywordMatchScorer;
    use crate::models::job::STATUS_PUBLISHED;
    use crate::store::testing::{make_candidate, make_job, InMemoryStore};

    fn test_app(store: Arc<InMemoryStore>) -> Router {
        let state = AppState {
            jobs: store.clone(),
            candidates: store,
            config: Config {
                database_url: "postgres://localhost/jobboard_test".to_string(),
                db_max_connections: 1,
                port: 0,
                rust_log: "info".to_string(),
                candidate_discovery_enabled: true,
            },
            match_scorer: Arc::new(KeywordMatchScorer),
        };
        build_router(state)
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        app.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let app = test_app(Arc::new(InMemoryStore::default()));
        let response = send(app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_publish_returns_ok_when_discovery_query_fails() {
        let store = Arc::new(InMemoryStore {
            fail_candidate_queries: true,
            ..Default::default()
        });
        let job = make_job("Software Developer", None);
        store.add_job(job.clone());

        let response = send(
            test_app(store.clone()),
            Method::POST,
            &format!("/api/v1/jobs/{}/publish", job.id),
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], STATUS_PUBLISHED);
        assert_eq!(body["discovery"]["status"], "failed");
        assert!(store.job(job.id).unwrap().is_published());
    }

    #[tokio::test]
    async fn test_publish_unknown_job_is_404() {
        let app = test_app(Arc::new(InMemoryStore::default()));
        let response = send(
            app,
            Method::POST,
            &format!("/api/v1/jobs/{}/publish", Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_ranked_applicants_endpoint() {
        let store = Arc::new(InMemoryStore::default());
        let job = make_job("Registered Nurse", None);
        store.add_job(job.clone());
        let low = make_candidate(Some("Fine Art"));
        let high = make_candidate(Some("Healthcare Science"));
        store.add_candidate(low.clone());
        store.add_candidate(high.clone());
        store.add_application(job.id, low.id);
        store.add_application(job.id, high.id);

        let response = send(
            test_app(store),
            Method::GET,
            &format!("/api/v1/jobs/{}/applicants", job.id),
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["matched_field_category"], "healthcare");
        assert_eq!(body["applicants"][0]["candidate_id"], high.id.to_string());
        assert_eq!(body["applicants"][0]["score"], 40);
        assert_eq!(body["applicants"][1]["tier"], "low");
    }

    #[tokio::test]
    async fn test_job_feed_lists_published_jobs() {
        let store = Arc::new(InMemoryStore::default());
        let mut live = make_job("Barista", None);
        live.status = STATUS_PUBLISHED.to_string();
        store.add_job(live);
        store.add_job(make_job("Unreleased", None));

        let response = send(test_app(store), Method::GET, "/api/v1/jobs?sort=title", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["jobs"][0]["title"], "Barista");
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let app = test_app(Arc::new(InMemoryStore::default()));
        let response = send(
            app,
            Method::POST,
            "/api/v1/matching/classify",
            Some(json!({ "title": "Hotel receptionist" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["category"], "hospitality");
    }

    #[tokio::test]
    async fn test_score_endpoint() {
        let app = test_app(Arc::new(InMemoryStore::default()));
        let response = send(
            app,
            Method::POST,
            "/api/v1/matching/score",
            Some(json!({
                "category": "software developer",
                "profile": { "skills": "software,business" }
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["skills"], 10);
        assert_eq!(body["total"], 10);
    }

    #[tokio::test]
    async fn test_score_endpoint_blank_category_scores_zero() {
        let app = test_app(Arc::new(InMemoryStore::default()));
        let response = send(
            app,
            Method::POST,
            "/api/v1/matching/score",
            Some(json!({
                "category": " ",
                "profile": { "field_of_study": "Computer Science", "skills": "rust" }
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["field_of_study"], 0);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_malformed_json_body_uses_error_envelope() {
        let app = test_app(Arc::new(InMemoryStore::default()));
        let response = send(
            app,
            Method::POST,
            "/api/v1/matching/classify",
            Some(json!({ "description": "no title here" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_feed_query_uses_error_envelope() {
        let app = test_app(Arc::new(InMemoryStore::default()));
        let response = send(app, Method::GET, "/api/v1/jobs?page=-1", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }
}

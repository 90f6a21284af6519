//! HTTP API tests driven through the router without binding a socket

#[cfg(test)]
mod api_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use axum::http::StatusCode;
    use axum::Router;
    use serde_json::json;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::build_app;
    use crate::api::AppState;
    use crate::config::AppConfig;
    use crate::tests::sample_service;

    fn app() -> Router {
        let config = AppConfig::default();
        let state = AppState::with_service(Some(Arc::new(sample_service())), &config);
        build_app(state, true)
    }

    fn degraded_app() -> Router {
        build_app(AppState::with_service(None, &AppConfig::default()), false)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["kb_loaded"], true);
        assert_eq!(body["data"]["knowledge_pieces"], 25);
        assert_eq!(body["data"]["sections"], 7);
    }

    #[tokio::test]
    async fn test_health_degraded() {
        let (status, body) = send(degraded_app(), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "degraded");
        assert_eq!(body["data"]["kb_loaded"], false);
        assert_eq!(body["data"]["knowledge_pieces"], 0);
    }

    #[tokio::test]
    async fn test_chat_answers() {
        let request = post_json("/api/chat", &json!({ "message": "Are your products organic?" }));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["answered"], true);
        assert!(body["data"]["response"]
            .as_str()
            .unwrap()
            .starts_with("Yes, "));
        assert!(!body["data"]["suggestions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_empty() {
        let (status, body) = send(app(), post_json("/api/chat", &json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["answered"], false);
        assert_eq!(body["data"]["suggestions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_chat_rejects_long_message() {
        let message = "organic ".repeat(1000);
        let (status, body) = send(app(), post_json("/api/chat", &json!({ "message": message }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_chat_degraded() {
        let request = post_json("/api/chat", &json!({ "message": "Are your products organic?" }));
        let (status, body) = send(degraded_app(), request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body["data"]["response"],
            crate::config::ResponseConfig::default().unavailable_message
        );
    }

    #[tokio::test]
    async fn test_suggestions_available_when_degraded() {
        let (status, body) = send(degraded_app(), get("/api/suggestions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["suggestions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_search() {
        let request = post_json("/api/search", &json!({ "query": "organic", "limit": 2 }));
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let results = body["data"]["results"].as_array().unwrap();
        assert!(!results.is_empty() && results.len() <= 2);
        assert!(results[0]["text"].as_str().unwrap().contains("organic"));
    }

    #[tokio::test]
    async fn test_sections() {
        let (status, body) = send(app(), get("/api/sections")).await;
        assert_eq!(status, StatusCode::OK);
        let sections = body["data"].as_array().unwrap();
        assert_eq!(sections.len(), 7);
        assert_eq!(sections[0]["name"], "About");
        assert_eq!(sections[0]["facts"], 3);

        let (status, body) = send(app(), get("/api/sections/Quality")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["facts"].as_array().unwrap().len(), 3);

        let (status, body) = send(app(), get("/api/sections/Pricing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}

mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use helpers::{offline_state, offline_state_with};
use planora_backend::config::{AppConfig, AuthConfig};
use planora_backend::api::router;
use planora_backend::auth::create_dev_token;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router(offline_state())
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    };
    (status, body)
}

fn authed(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let token = create_dev_token(Uuid::new_v4());
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_is_ok_without_database() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_readiness_reports_unavailable_database() {
    let request = Request::get("/health/ready").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = send(authed(Method::GET, "/api/nothing-here", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    for uri in ["/api/events", "/api/tasks", "/api/vendors", "/api/analytics", "/api/preferences"] {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let request = Request::get("/api/events")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unauthenticated_write_is_rejected_before_body_parsing() {
    let request = Request::post("/api/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dev_token_rejected_when_environment_unset() {
    // AppConfig::default() mirrors an unset ENVIRONMENT: dev tokens go to the provider
    let config = AppConfig {
        auth: AuthConfig {
            provider_url: "http://127.0.0.1:1".to_string(),
            ..AuthConfig::default()
        },
        ..AppConfig::default()
    };
    let request = authed(Method::GET, "/api/tasks", None);
    let response = router(offline_state_with(config))
        .oneshot(request)
        .await
        .expect("router is infallible");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::post("/api/events")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", create_dev_token(Uuid::new_v4())),
        )
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_blank_event_title_is_bad_request() {
    let body = json!({
        "title": "   ",
        "event_date": "2030-05-01T18:00:00Z"
    });
    let (status, body) = send(authed(Method::POST, "/api/events", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_event_ending_before_start_is_bad_request() {
    let body = json!({
        "title": "Launch party",
        "event_date": "2030-05-01T18:00:00Z",
        "end_date": "2030-05-01T17:00:00Z"
    });
    let (status, _) = send(authed(Method::POST, "/api/events", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_enum_value_is_bad_request() {
    let body = json!({
        "title": "Launch party",
        "event_date": "2030-05-01T18:00:00Z",
        "status": "postponed"
    });
    let (status, _) = send(authed(Method::POST, "/api/events", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_path_uuid_is_bad_request() {
    let (status, _) = send(authed(Method::GET, "/api/events/not-a-uuid", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_task_list_requires_event_id() {
    let (status, _) = send(authed(Method::GET, "/api/tasks", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_metrics_are_bad_request() {
    let uri = format!("/api/analytics/{}", Uuid::new_v4());
    let body = json!({ "registrations": 10, "attendees": -3 });
    let (status, _) = send(authed(Method::PUT, &uri, Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_out_of_range_feedback_rating_is_bad_request() {
    let uri = format!("/api/analytics/{}/feedback", Uuid::new_v4());
    let body = json!({ "rating": 0 });
    let (status, _) = send(authed(Method::POST, &uri, Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_currency_is_bad_request() {
    let body = json!({ "currency": "dollars" });
    let (status, _) = send(authed(Method::PUT, "/api/preferences", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// AI suggestions
// ============================================================================

#[tokio::test]
async fn test_suggestions_fall_back_without_api_key() {
    let body = json!({ "category": "venue" });
    let (status, body) = send(authed(Method::POST, "/api/ai/suggestions", Some(body))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "venue");
    assert_eq!(body["source"], "fallback");

    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(Value::is_string));
}

#[tokio::test]
async fn test_unknown_suggestion_category_is_bad_request() {
    let body = json!({ "category": "fireworks" });
    let (status, _) = send(authed(Method::POST, "/api/ai/suggestions", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

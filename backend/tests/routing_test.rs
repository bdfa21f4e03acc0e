//! Integration tests for dispatch order, static serving and error envelopes

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::get,
};
use common::{parse, TestApp, INDEX_HTML};
use fittrack_server::{config::Environment, routes};
use tower::ServiceExt;

async fn explode() -> &'static str {
    panic!("kaboom")
}

async fn call_exploding_route(environment: Environment) -> (StatusCode, serde_json::Value) {
    let test_app = TestApp::with_environment(environment);
    let app = routes::with_middleware(
        routes::app_routes().route("/api/boom", get(explode)),
        test_app.state.clone(),
    );

    let request = Request::builder().uri("/api/boom").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["collections"]["foods"], 18);
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = TestApp::new();

    let (status, body) = app.get("/health/live", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_unknown_api_path_returns_structured_404() {
    let app = TestApp::new();

    for path in ["/api/nonexistent", "/api/food/1/extra", "/api/auth/unknown", "/api/log/a/b"] {
        let (status, body) = app.get(path, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "path {}", path);
        assert_eq!(
            parse(&body),
            serde_json::json!({ "success": false, "error": "API endpoint not found" })
        );
    }
}

#[tokio::test]
async fn test_unknown_api_path_never_serves_index() {
    let app = TestApp::new();

    let (_, body) = app.delete("/api/whatever/else", None).await;
    assert!(!body.contains("<html>"));
}

#[tokio::test]
async fn test_root_serves_index() {
    let app = TestApp::new();

    let (status, body) = app.get("/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let app = TestApp::new();

    for path in ["/dashboard", "/dashboard/settings", "/api", "/apiary"] {
        let (status, body) = app.get(path, None).await;

        assert_eq!(status, StatusCode::OK, "path {}", path);
        assert_eq!(body, INDEX_HTML, "path {}", path);
    }
}

#[tokio::test]
async fn test_existing_static_file_is_served() {
    let app = TestApp::new();

    let (status, body) = app.get("/app.js", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("fittrack"));
}

#[tokio::test]
async fn test_panic_includes_details_in_development() {
    let (status, body) = call_exploding_route(Environment::Development).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["details"], "kaboom");
}

#[tokio::test]
async fn test_panic_hides_details_outside_development() {
    for environment in [Environment::Production, Environment::Unspecified] {
        let (status, body) = call_exploding_route(environment).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("details").is_none());
    }
}

#[tokio::test]
async fn test_request_id_is_set() {
    let app = TestApp::new();

    let request = Request::builder().uri("/health/live").body(Body::empty()).unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/log")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization,content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_trailing_slash_on_api_mounts() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let (status, body) = app.get("/api/food/?goal=Stay%20Fit", None).await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["count"], 6);
    assert!(body["data"].as_array().unwrap().iter().all(|f| f["goalType"] == "Stay Fit"));

    let (status, body) = app.get("/api/log/", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["count"], 0);

    let (status, _) = app.get("/api/auth/me/", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_bare_api_prefix_with_slash_is_still_a_miss() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["error"], "API endpoint not found");
}

//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use common::{parse, unique_email, TestApp, TEST_PASSWORD};
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();
    let email = unique_email();

    let body = json!({
        "name": "Jordan Lee",
        "email": email,
        "password": TEST_PASSWORD,
        "goal": "Lose Weight",
        "age": 31,
        "weightKg": 72.5,
    });
    let (status, response) = app.post("/api/auth/register", &body, None).await;

    assert_eq!(status, StatusCode::CREATED);
    let response = parse(&response);
    assert_eq!(response["success"], true);
    assert_eq!(response["message"], "Registration successful");
    assert_eq!(response["data"]["tokenType"], "Bearer");
    assert!(!response["data"]["token"].as_str().unwrap().is_empty());

    let user = &response["data"]["user"];
    assert_eq!(user["email"], email);
    assert_eq!(user["goal"], "Lose Weight");
    assert_eq!(user["weightKg"], 72.5);
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let body = json!({
        "name": "Someone Else",
        "email": user.email.to_uppercase(),
        "password": TEST_PASSWORD,
    });
    let (status, response) = app.post("/api/auth/register", &body, None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(parse(&response)["error"], "Email already registered");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::new();

    let body = json!({
        "name": "No Email",
        "email": "not-an-email",
        "password": TEST_PASSWORD,
    });
    let (status, response) = app.post("/api/auth/register", &body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&response)["error"], "Invalid email format");
}

#[tokio::test]
async fn test_register_weak_password() {
    let app = TestApp::new();

    let body = json!({
        "name": "Weak",
        "email": unique_email(),
        "password": "123",
    });
    let (status, _) = app.post("/api/auth/register", &body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = TestApp::new();

    let (status, response) = app
        .send("POST", "/api/auth/register", None, Some("{not json".to_string()))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&response)["success"], false);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let body = json!({ "email": user.email, "password": TEST_PASSWORD });
    let (status, response) = app.post("/api/auth/login", &body, None).await;

    assert_eq!(status, StatusCode::OK);
    let response = parse(&response);
    assert_eq!(response["data"]["user"]["id"], user.id.as_str());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let body = json!({ "email": user.email, "password": "WrongPassword123!" });
    let (status, response) = app.post("/api/auth/login", &body, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(parse(&response)["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::new();

    let body = json!({ "email": unique_email(), "password": TEST_PASSWORD });
    let (status, response) = app.post("/api/auth/login", &body, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(parse(&response)["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let (status, response) = app.get("/api/auth/me", Some(&user.token)).await;

    assert_eq!(status, StatusCode::OK);
    let response = parse(&response);
    assert_eq!(response["data"]["email"], user.email);
    assert_eq!(response["data"]["goal"], "Stay Fit");
}

#[tokio::test]
async fn test_get_profile_requires_token() {
    let app = TestApp::new();

    let (status, response) = app.get("/api/auth/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(parse(&response)["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let body = json!({ "goal": "Gain Muscle", "age": 40 });
    let (status, response) = app.put("/api/auth/me", &body, Some(&user.token)).await;

    assert_eq!(status, StatusCode::OK);
    let response = parse(&response);
    assert_eq!(response["data"]["goal"], "Gain Muscle");
    assert_eq!(response["data"]["age"], 40);

    let (_, profile) = app.get("/api/auth/me", Some(&user.token)).await;
    assert_eq!(parse(&profile)["data"]["goal"], "Gain Muscle");
}

#[tokio::test]
async fn test_update_profile_validates() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let body = json!({ "age": 7 });
    let (status, response) = app.put("/api/auth/me", &body, Some(&user.token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&response)["error"], "Age must be between 13 and 120");
}

#[tokio::test]
async fn test_register_blank_name_is_rejected() {
    let app = TestApp::new();

    let body = json!({
        "name": "   ",
        "email": unique_email(),
        "password": TEST_PASSWORD,
    });
    let (status, response) = app.post("/api/auth/register", &body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&response)["error"], "Name must be 1-100 characters");
}

#[tokio::test]
async fn test_update_profile_blank_name_is_rejected() {
    let app = TestApp::new();
    let user = app.register_user().await;

    let (status, _) = app
        .put("/api/auth/me", &json!({ "name": "  " }), Some(&user.token))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

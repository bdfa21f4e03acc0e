//! Common test utilities for integration tests
//!
//! Every [`TestApp`] owns a fresh in-memory store and a temporary static
//! directory, so tests never share state.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use fittrack_server::{
    config::{AppConfig, Environment},
    routes,
    state::AppState,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

pub const INDEX_HTML: &str = "<!doctype html><html><body>FitTrack</body></html>";
pub const TEST_PASSWORD: &str = "SecurePassword123!";

/// Lowest work factor bcrypt accepts, keeps registration fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub static_dir: TempDir,
}

/// A registered user and its bearer token
pub struct TestUser {
    pub email: String,
    pub token: String,
    pub id: String,
}

impl TestApp {
    /// Development-mode app, store not yet seeded
    pub fn new() -> Self {
        Self::with_environment(Environment::Development)
    }

    pub fn with_environment(environment: Environment) -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(static_dir.path().join("app.js"), "console.log('fittrack');").unwrap();

        let state = AppState::new(test_config(&static_dir, environment));
        let app = routes::create_router(state.clone());

        Self {
            app,
            state,
            static_dir,
        }
    }

    /// Same as [`TestApp::new`] but seeded the way startup does it
    pub fn started() -> Self {
        let app = Self::new();
        app.state.init();
        app
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, String) {
        self.send("GET", path, token, None).await
    }

    pub async fn post(&self, path: &str, body: &Value, token: Option<&str>) -> (StatusCode, String) {
        self.send("POST", path, token, Some(body.to_string())).await
    }

    pub async fn put(&self, path: &str, body: &Value, token: Option<&str>) -> (StatusCode, String) {
        self.send("PUT", path, token, Some(body.to_string())).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, String) {
        self.send("DELETE", path, token, None).await
    }

    /// Send a request with an arbitrary raw body
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let body = match body {
            Some(body) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(body)
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Register a user with generated name and email
    pub async fn register_user(&self) -> TestUser {
        let email = unique_email();
        let name: String = Name().fake();
        let body = json!({
            "name": name,
            "email": email,
            "password": TEST_PASSWORD,
            "goal": "Stay Fit",
        });

        let (status, response) = self.post("/api/auth/register", &body, None).await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {}", response);

        let response = parse(&response);
        TestUser {
            email,
            token: response["data"]["token"].as_str().unwrap().to_string(),
            id: response["data"]["user"]["id"].as_str().unwrap().to_string(),
        }
    }
}

/// Lower-case generated email, unique per call
pub fn unique_email() -> String {
    let email: String = SafeEmail().fake();
    format!("{}.{}", uuid::Uuid::new_v4().simple(), email.to_lowercase())
}

pub fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

fn test_config(static_dir: &TempDir, environment: Environment) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.auth.jwt_secret = Some("test-secret-key-for-testing-only".to_string());
    config.auth.bcrypt_cost = TEST_BCRYPT_COST;
    config.static_dir = static_dir.path().to_path_buf();
    config.environment = environment;
    config
}

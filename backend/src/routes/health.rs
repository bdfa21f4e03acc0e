//! Health check endpoints
//!
//! - /health - Store and initialization status
//! - /health/live - Liveness probe (always OK while the process runs)

use crate::repositories::{FoodRepository, LogRepository, UserRepository};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<CollectionSizes>,
}

/// Record counts of the in-memory collections
#[derive(Serialize)]
pub struct CollectionSizes {
    pub users: usize,
    pub logs: usize,
    pub foods: usize,
}

/// Basic health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        initialized: Some(state.init_gate.is_initialized()),
        collections: Some(CollectionSizes {
            users: store.user_count(),
            logs: store.log_count(),
            foods: store.food_count(),
        }),
    })
}

/// Liveness probe
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        initialized: None,
        collections: None,
    })
}

//! Authentication routes
//!
//! Registration, login and the signed-in user's profile.

use super::extract::ApiJson;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fittrack_shared::{
    ApiResponse, AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_profile).put(update_profile))
        .fallback(|| async { ApiError::endpoint_not_found() })
}

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AuthResponse>>)> {
    let auth = UserService::register(state.store(), state.jwt(), state.passwords(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(auth).with_message("Registration successful")),
    ))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<AuthResponse>>> {
    let auth = UserService::login(state.store(), state.jwt(), state.passwords(), req).await?;
    Ok(Json(ApiResponse::ok(auth).with_message("Login successful")))
}

/// GET /api/auth/me
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserProfile>>> {
    let profile = UserService::get_profile(state.store(), auth.user_id)?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/auth/me
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<UserProfile>>> {
    let profile = UserService::update_profile(state.store(), auth.user_id, req)?;
    Ok(Json(ApiResponse::ok(profile).with_message("Profile updated")))
}

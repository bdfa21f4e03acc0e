//! Log routes, all scoped to the authenticated user

use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::LogService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fittrack_shared::{
    ApiResponse, CreateLogRequest, DailySummary, DateQuery, LogEntry, LogQuery, UpdateLogRequest,
};
use uuid::Uuid;

/// Create log routes
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs).post(create_log))
        .route("/summary", get(daily_summary))
        .route("/:id", get(get_log).put(update_log).delete(delete_log))
        .fallback(|| async { ApiError::endpoint_not_found() })
}

/// POST /api/log
async fn create_log(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreateLogRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<LogEntry>>)> {
    let entry = LogService::create(state.store(), auth.user_id, req)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(entry).with_message("Log entry created")),
    ))
}

/// GET /api/log?type=&date=&limit=
async fn list_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<LogQuery>,
) -> Json<ApiResponse<Vec<LogEntry>>> {
    Json(ApiResponse::list(LogService::list(
        state.store(),
        auth.user_id,
        query,
    )))
}

/// GET /api/log/summary?date=
async fn daily_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<DateQuery>,
) -> Json<ApiResponse<DailySummary>> {
    Json(ApiResponse::ok(LogService::daily_summary(
        state.store(),
        auth.user_id,
        query.date,
    )))
}

/// GET /api/log/:id
async fn get_log(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<ApiResponse<LogEntry>>> {
    let entry = LogService::get(state.store(), auth.user_id, id)?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// PUT /api/log/:id
async fn update_log(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateLogRequest>,
) -> ApiResult<Json<ApiResponse<LogEntry>>> {
    let entry = LogService::update(state.store(), auth.user_id, id, req)?;
    Ok(Json(ApiResponse::ok(entry).with_message("Log entry updated")))
}

/// DELETE /api/log/:id
async fn delete_log(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<ApiResponse<LogEntry>>> {
    let entry = LogService::delete(state.store(), auth.user_id, id)?;
    Ok(Json(ApiResponse::ok(entry).with_message("Log entry deleted")))
}

//! Food catalog routes (public, read-only)

use super::extract::{ApiPath, ApiQuery};
use crate::error::{ApiError, ApiResult};
use crate::services::FoodService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fittrack_shared::{ApiResponse, FoodItem, FoodQuery, GoalCount};

/// Create food routes
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_foods))
        .route("/goals", get(list_goals))
        .route("/:id", get(get_food))
        .fallback(|| async { ApiError::endpoint_not_found() })
}

/// GET /api/food?goal=Lose%20Weight
async fn list_foods(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FoodQuery>,
) -> ApiResult<Json<ApiResponse<Vec<FoodItem>>>> {
    let items = FoodService::list(state.store(), query.goal.as_deref())?;
    Ok(Json(ApiResponse::list(items)))
}

/// GET /api/food/goals
async fn list_goals(State(state): State<AppState>) -> Json<ApiResponse<Vec<GoalCount>>> {
    Json(ApiResponse::list(FoodService::goal_counts(state.store())))
}

/// GET /api/food/:id
async fn get_food(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> ApiResult<Json<ApiResponse<FoodItem>>> {
    let item = FoodService::get(state.store(), id)?;
    Ok(Json(ApiResponse::ok(item)))
}

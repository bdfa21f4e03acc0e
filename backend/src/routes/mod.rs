//! Route definitions for the FitTrack API
//!
//! Dispatch order: health probes, the three API sub-routers, then the
//! fallback, which answers unknown `/api/*` paths with a structured 404 and
//! everything else from the static directory (default document when no
//! file matches).

use crate::error::{handle_panic, ApiError, InternalErrorDetail, INTERNAL_ERROR_MESSAGE};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, uri::PathAndQuery, Method, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fittrack_shared::ErrorBody;
use tower::{util::MapRequestLayer, Layer, ServiceExt};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info_span, Level, Span};

mod auth;
mod extract;
mod food;
mod health;
mod log;


pub use auth::auth_routes;
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use food::food_routes;
pub use log::log_routes;

/// Default document served for client-side routes
pub const INDEX_DOCUMENT: &str = "index.html";

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    with_middleware(app_routes(), state)
}

/// All routes, without middleware or state
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/auth", auth::auth_routes())
        .nest("/api/log", log::log_routes())
        .nest("/api/food", food::food_routes())
        .fallback(fallback)
}

/// Wrap `routes` in the request lifecycle: trailing slash handling,
/// tracing, lazy initialization, panic capture and error detail gating
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let app = routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::map_response_with_state(
            state.clone(),
            attach_error_details,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            ensure_initialized,
        ))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    // Runs before routing, so it has to wrap the finished router
    Router::new().fallback_service(MapRequestLayer::new(trim_api_trailing_slash).layer(app))
}

/// `/api/food/` routes like `/api/food`
fn trim_api_trailing_slash(mut request: Request) -> Request {
    let path = request.uri().path();
    let trimmed = path.trim_end_matches('/');
    if trimmed.len() == path.len() || !is_api_path(trimmed) {
        return request;
    }

    let rebuilt = match request.uri().query() {
        Some(query) => format!("{}?{}", trimmed, query),
        None => trimmed.to_string(),
    };
    let mut parts = request.uri().clone().into_parts();
    parts.path_and_query = match PathAndQuery::try_from(rebuilt) {
        Ok(path_and_query) => Some(path_and_query),
        Err(_) => return request,
    };
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    request
}

fn request_span(request: &Request) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Seed the store on the first request if startup has not done it
async fn ensure_initialized(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.ensure_initialized();
    next.run(request).await
}

/// Put the internal error message into 500 bodies in development mode
async fn attach_error_details(State(state): State<AppState>, mut response: Response) -> Response {
    let Some(InternalErrorDetail(detail)) = response.extensions_mut().remove::<InternalErrorDetail>()
    else {
        return response;
    };

    if !state.config().environment.exposes_error_details() {
        return response;
    }

    let body = ErrorBody {
        success: false,
        error: INTERNAL_ERROR_MESSAGE.to_string(),
        details: Some(detail),
    };
    (response.status(), Json(body)).into_response()
}

/// Structured 404 for the API namespace, static files or the default document otherwise
async fn fallback(State(state): State<AppState>, request: Request) -> Response {
    if is_api_path(request.uri().path()) {
        return ApiError::endpoint_not_found().into_response();
    }

    let static_dir = &state.config().static_dir;
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join(INDEX_DOCUMENT)));

    match spa.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

fn is_api_path(path: &str) -> bool {
    path.starts_with("/api/")
}

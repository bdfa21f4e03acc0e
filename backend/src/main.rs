//! FitTrack server
//!
//! Fitness tracking backend: accounts, workout and meal logs, and a food
//! catalog, all held in process memory.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: Business rules and validation
//! - Repositories: Collection access over the in-memory store

use anyhow::Result;
use fittrack_server::{
    config::{self, Environment},
    routes,
    state::AppState,
};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    init_tracing(environment);

    let mut config = config::AppConfig::load()?;
    config.ensure_jwt_secret();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = environment.name(),
        "Starting FitTrack server"
    );

    let state = AppState::new(config.clone());
    state.init();

    // Production hosts import the router and own the listener
    if environment.is_production() {
        info!("Production mode: not binding a listener");
        return Ok(());
    }

    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Server listening");
    info!("API available at http://localhost:{}/api", config.server.port);
    info!("Health check at http://localhost:{}/health", config.server.port);
    warn!("Using in-memory storage. Data is lost on restart");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(environment: Environment) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            "fittrack_server=info,tower_http=info".into()
        } else {
            "fittrack_server=debug,tower_http=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if environment.is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

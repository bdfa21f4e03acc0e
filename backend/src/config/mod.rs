//! Configuration management for the FitTrack server
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file for the environment (config/development.toml, ...)
//! 3. Environment variables (prefix: FITTRACK__)
//! 4. The plain `PORT` and `JWT_SECRET` variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Listen port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Signing secret substituted when `JWT_SECRET` is missing. Not for production.
pub const FALLBACK_JWT_SECRET: &str = "default-secret-key-change-this-in-production";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    /// Directory holding the front end; `index.html` inside it is the default document
    pub static_dir: PathBuf,
    #[serde(skip)]
    pub environment: Environment,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Token and password settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: Option<String>,
    pub token_expiry_secs: i64,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// The configured secret, or the insecure fallback
    pub fn secret(&self) -> &str {
        self.jwt_secret.as_deref().unwrap_or(FALLBACK_JWT_SECRET)
    }
}

/// Deployment mode, read from `APP_ENV` (or `NODE_ENV`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    #[default]
    Unspecified,
}

impl Environment {
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(n) if n.eq_ignore_ascii_case("development") => Environment::Development,
            Some(n) if n.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Unspecified,
        }
    }

    /// Detect the mode from the process environment
    pub fn from_env() -> Self {
        Self::detect(|key| env::var(key).ok())
    }

    pub fn detect<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("APP_ENV").or_else(|| lookup("NODE_ENV"));
        Self::from_name(name.as_deref())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Unspecified => "unspecified",
        }
    }

    #[inline]
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// Whether 500 responses may carry the underlying error message
    #[inline]
    pub fn exposes_error_details(&self) -> bool {
        *self == Environment::Development
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            auth: AuthConfig {
                jwt_secret: None,
                token_expiry_secs: 7 * 24 * 60 * 60,
                bcrypt_cost: bcrypt::DEFAULT_COST,
            },
            static_dir: PathBuf::from("public"),
            environment: Environment::Unspecified,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Load configuration, reading the plain variables through `lookup`
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::detect(&lookup);
        let config_file = format!("config/{}", environment.name());
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g. FITTRACK__SERVER__HOST=127.0.0.1 sets server.host
            .add_source(config::Environment::with_prefix("FITTRACK").separator("__"))
            .set_override_option("server.port", non_empty("PORT"))?
            .set_override_option("auth.jwt_secret", non_empty("JWT_SECRET"))?
            .build()?;

        let mut loaded: AppConfig = config.try_deserialize()?;
        loaded.environment = environment;
        Ok(loaded)
    }

    /// Substitute the fallback secret when none is configured
    ///
    /// Returns `true` when the fallback was used. Startup continues either way.
    pub fn ensure_jwt_secret(&mut self) -> bool {
        if self.auth.jwt_secret.is_some() {
            return false;
        }

        warn!("JWT_SECRET is not set. Using default (not secure for production)");
        self.auth.jwt_secret = Some(FALLBACK_JWT_SECRET.to_string());
        true
    }
}

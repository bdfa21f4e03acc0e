//! Application state management
//!
//! [`AppState`] is handed to every handler through Axum's state extraction.
//! It owns the in-memory store and the initialization gate, so each state
//! value is an isolated "process" as far as the API is concerned.

use crate::auth::{JwtService, PasswordHasher};
use crate::config::AppConfig;
use crate::seed::{InitGate, InitTrigger};
use crate::store::MemoryStore;
use std::sync::Arc;

/// Shared application state
///
/// Cloning is O(1): every field is an `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub init_gate: Arc<InitGate>,
    pub config: Arc<AppConfig>,
    pub jwt: JwtService,
    pub passwords: PasswordHasher,
}

impl AppState {
    /// Build a state with an empty store
    ///
    /// JWT keys are derived here, once.
    pub fn new(config: AppConfig) -> Self {
        let jwt = JwtService::new(config.auth.secret(), config.auth.token_expiry_secs);
        let passwords = PasswordHasher::new(config.auth.bcrypt_cost);

        Self {
            store: Arc::new(MemoryStore::new()),
            init_gate: Arc::new(InitGate::new()),
            config: Arc::new(config),
            jwt,
            passwords,
        }
    }

    /// Explicit startup initialization. Returns `true` if this call seeded.
    pub fn init(&self) -> bool {
        self.init_gate.ensure(self.store.as_ref(), InitTrigger::Startup)
    }

    /// Lazy initialization from the request path
    pub fn ensure_initialized(&self) -> bool {
        self.init_gate
            .ensure(self.store.as_ref(), InitTrigger::FirstRequest)
    }

    /// Empty every collection and re-arm the initialization gate
    pub fn reset(&self) {
        self.store.reset();
        self.init_gate.reset();
    }

    #[inline]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn passwords(&self) -> &PasswordHasher {
        &self.passwords
    }
}

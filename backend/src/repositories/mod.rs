//! Repository interfaces
//!
//! One trait per collection. Services are written against these traits;
//! [`MemoryStore`](crate::store::MemoryStore) is the only implementation.
//! Every method runs to completion without awaiting.

pub mod food;
pub mod log;
pub mod user;

pub use food::FoodRepository;
pub use log::{LogChanges, LogFilter, LogRepository};
pub use user::{UpdateUser, UserRecord, UserRepository};

use thiserror::Error;

/// Store-level failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Conflict(String),
}

//! FitTrack Shared Library
//!
//! Wire types used by the server and by any client talking to its API.

pub mod errors;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;

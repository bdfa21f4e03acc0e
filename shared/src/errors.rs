//! Error types shared between the server and its clients

use thiserror::Error;

/// Returned when a string does not name one of the goal categories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown goal category '{input}'. Expected one of: Lose Weight, Gain Muscle, Stay Fit")]
pub struct ParseGoalError {
    pub input: String,
}

/// Returned when a string does not name a log entry type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown log type '{input}'. Expected one of: workout, food")]
pub struct ParseLogTypeError {
    pub input: String,
}

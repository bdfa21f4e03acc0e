//! API request and response types

use crate::models::{GoalCategory, LogType, UserProfile};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Success envelope wrapping every API payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wrap a list and report its length
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
            message: None,
        }
    }
}

/// Failure envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
    #[serde(default)]
    pub goal: Option<GoalCategory>,
    #[serde(default)]
    #[validate(range(min = 13, max = 120, message = "Age must be between 13 and 120"))]
    pub age: Option<u32>,
    #[serde(default)]
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height_cm: Option<f64>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued token together with the account it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

/// Partial profile update; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[serde(default)]
    pub goal: Option<GoalCategory>,
    #[serde(default)]
    #[validate(range(min = 13, max = 120, message = "Age must be between 13 and 120"))]
    pub age: Option<u32>,
    #[serde(default)]
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height_cm: Option<f64>,
}

// ============================================================================
// Logs
// ============================================================================

/// Food payload as submitted; either `food_id` or `name` + `calories`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogInput {
    #[serde(default)]
    pub food_id: Option<u32>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Food name must be 1-100 characters"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(range(max = 10000, message = "Calories must be at most 10000"))]
    pub calories: Option<u32>,
    #[serde(default)]
    #[validate(range(max = 1000, message = "Protein must be at most 1000 g"))]
    pub protein: Option<u32>,
}

/// Type-tagged payload of a new log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum LogInput {
    Workout(crate::models::WorkoutLog),
    Food(FoodLogInput),
}

/// Create log entry request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
    #[serde(flatten)]
    pub entry: LogInput,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

/// Update log entry request
///
/// `payload` is interpreted according to the entry's existing type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogRequest {
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

/// Filters for listing log entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogQuery {
    #[serde(default, rename = "type", deserialize_with = "log_type_filter")]
    pub log_type: Option<LogType>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// `?type=Workout` and `?type=workout` select the same entries; blank means no filter
fn log_type_filter<'de, D>(deserializer: D) -> Result<Option<LogType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| value.parse().map_err(serde::de::Error::custom))
        .transpose()
}

/// Query for the daily summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Totals for one user's day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub calories_consumed: u64,
    pub calories_burned: u64,
    pub net_calories: i64,
    pub protein: u64,
    pub workout_minutes: u64,
    pub workouts: usize,
    pub meals: usize,
}

// ============================================================================
// Food catalog
// ============================================================================

/// Catalog filter; `goal` is parsed by the server so errors can list valid values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodQuery {
    #[serde(default)]
    pub goal: Option<String>,
}

/// Number of catalog items per goal category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCount {
    pub goal: GoalCategory,
    pub count: usize,
}

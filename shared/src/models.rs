//! Domain models for the FitTrack application

use crate::errors::{ParseGoalError, ParseLogTypeError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Fitness objective used to partition the food catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GoalCategory {
    #[serde(rename = "Lose Weight")]
    LoseWeight,
    #[serde(rename = "Gain Muscle")]
    GainMuscle,
    #[serde(rename = "Stay Fit")]
    StayFit,
}

impl GoalCategory {
    /// Every category, in catalog order
    pub const ALL: [GoalCategory; 3] = [
        GoalCategory::LoseWeight,
        GoalCategory::GainMuscle,
        GoalCategory::StayFit,
    ];

    /// Display label, identical to the wire representation
    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::LoseWeight => "Lose Weight",
            GoalCategory::GainMuscle => "Gain Muscle",
            GoalCategory::StayFit => "Stay Fit",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalCategory {
    type Err = ParseGoalError;

    /// Matches the label ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GoalCategory::ALL
            .into_iter()
            .find(|goal| goal.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseGoalError {
                input: s.to_string(),
            })
    }
}

/// Static catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u32,
    pub goal_type: GoalCategory,
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Public view of a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Kind of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Workout,
    Food,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Workout => "workout",
            LogType::Food => "food",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogType {
    type Err = ParseLogTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workout" => Ok(LogType::Workout),
            "food" => Ok(LogType::Food),
            _ => Err(ParseLogTypeError {
                input: s.to_string(),
            }),
        }
    }
}

/// A completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    #[validate(length(min = 1, max = 100, message = "Activity must be 1-100 characters"))]
    pub activity: String,
    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: u32,
    #[serde(default)]
    #[validate(range(max = 10000, message = "Calories burned must be at most 10000"))]
    pub calories_burned: u32,
}

/// A consumed meal, resolved against the catalog when `food_id` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_id: Option<u32>,
    pub name: String,
    pub calories: u32,
    pub protein: u32,
}

/// Type-specific content of a log entry
///
/// Serialized as `{"type": "workout", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum LogPayload {
    Workout(WorkoutLog),
    Food(FoodLog),
}

impl LogPayload {
    pub fn log_type(&self) -> LogType {
        match self {
            LogPayload::Workout(_) => LogType::Workout,
            LogPayload::Food(_) => LogType::Food,
        }
    }
}

/// One user action or measurement at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub payload: LogPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LogEntry {
    #[inline]
    pub fn log_type(&self) -> LogType {
        self.payload.log_type()
    }
}

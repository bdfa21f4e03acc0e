//! Workout and food logging

use crate::error::ApiError;
use crate::repositories::{FoodRepository, LogChanges, LogFilter, LogRepository, UserRepository};
use chrono::{NaiveDate, Utc};
use fittrack_shared::{
    CreateLogRequest, DailySummary, FoodLog, FoodLogInput, LogEntry, LogInput, LogPayload,
    LogQuery, LogType, UpdateLogRequest, WorkoutLog,
};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

/// Upper bound on `limit` when listing entries
pub const MAX_LIST_LIMIT: usize = 500;

const MAX_NOTES_LEN: usize = 500;

/// Log service scoped to one user per call
pub struct LogService;

impl LogService {
    /// Record a new entry for `user_id`
    ///
    /// The owner must exist; food entries referencing the catalog are filled
    /// in from the catalog item.
    pub fn create<S>(store: &S, user_id: Uuid, req: CreateLogRequest) -> Result<LogEntry, ApiError>
    where
        S: UserRepository + LogRepository + FoodRepository + ?Sized,
    {
        if store.find_user(user_id).is_none() {
            return Err(ApiError::Unauthorized("User not found".to_string()));
        }

        let payload = match req.entry {
            LogInput::Workout(workout) => Self::workout_payload(workout)?,
            LogInput::Food(food) => Self::food_payload(store, food)?,
        };
        let notes = validate_notes(req.notes)?;

        let now = Utc::now();
        let entry = store.insert_log(LogEntry {
            id: Uuid::new_v4(),
            user_id,
            payload,
            notes,
            logged_at: req.logged_at.unwrap_or(now),
            created_at: now,
            updated_at: now,
        });

        debug!(log_id = %entry.id, log_type = %entry.log_type(), "Log entry created");
        Ok(entry)
    }

    pub fn list<S>(store: &S, user_id: Uuid, query: LogQuery) -> Vec<LogEntry>
    where
        S: LogRepository + ?Sized,
    {
        let filter = LogFilter {
            log_type: query.log_type,
            date: query.date,
            limit: Some(query.limit.unwrap_or(MAX_LIST_LIMIT).min(MAX_LIST_LIMIT)),
        };
        store.list_logs(user_id, filter)
    }

    pub fn get<S>(store: &S, user_id: Uuid, id: Uuid) -> Result<LogEntry, ApiError>
    where
        S: LogRepository + ?Sized,
    {
        store.find_log(user_id, id).ok_or_else(not_found)
    }

    /// Update an entry; a new payload must match the entry's existing type
    pub fn update<S>(
        store: &S,
        user_id: Uuid,
        id: Uuid,
        req: UpdateLogRequest,
    ) -> Result<LogEntry, ApiError>
    where
        S: LogRepository + FoodRepository + ?Sized,
    {
        let existing = store.find_log(user_id, id).ok_or_else(not_found)?;

        let payload = match req.payload {
            Some(raw) => Some(match existing.log_type() {
                LogType::Workout => Self::workout_payload(parse_payload::<WorkoutLog>(raw)?)?,
                LogType::Food => Self::food_payload(store, parse_payload::<FoodLogInput>(raw)?)?,
            }),
            None => None,
        };

        let changes = LogChanges {
            payload,
            notes: validate_notes(req.notes)?,
            logged_at: req.logged_at,
        };

        store.update_log(user_id, id, changes).ok_or_else(not_found)
    }

    pub fn delete<S>(store: &S, user_id: Uuid, id: Uuid) -> Result<LogEntry, ApiError>
    where
        S: LogRepository + ?Sized,
    {
        store.delete_log(user_id, id).ok_or_else(not_found)
    }

    /// Totals over the user's entries logged on `date` (UTC)
    pub fn daily_summary<S>(store: &S, user_id: Uuid, date: Option<NaiveDate>) -> DailySummary
    where
        S: LogRepository + ?Sized,
    {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let entries = store.list_logs(
            user_id,
            LogFilter {
                date: Some(date),
                ..Default::default()
            },
        );

        let mut summary = DailySummary {
            date,
            calories_consumed: 0,
            calories_burned: 0,
            net_calories: 0,
            protein: 0,
            workout_minutes: 0,
            workouts: 0,
            meals: 0,
        };

        for entry in &entries {
            match &entry.payload {
                LogPayload::Workout(w) => {
                    summary.workouts += 1;
                    summary.workout_minutes += u64::from(w.duration_minutes);
                    summary.calories_burned += u64::from(w.calories_burned);
                }
                LogPayload::Food(f) => {
                    summary.meals += 1;
                    summary.calories_consumed += u64::from(f.calories);
                    summary.protein += u64::from(f.protein);
                }
            }
        }
        summary.net_calories = summary.calories_consumed as i64 - summary.calories_burned as i64;
        summary
    }

    fn workout_payload(workout: WorkoutLog) -> Result<LogPayload, ApiError> {
        let workout = WorkoutLog {
            activity: workout.activity.trim().to_string(),
            ..workout
        };
        workout.validate()?;
        Ok(LogPayload::Workout(workout))
    }

    fn food_payload<S>(store: &S, input: FoodLogInput) -> Result<LogPayload, ApiError>
    where
        S: FoodRepository + ?Sized,
    {
        input.validate()?;

        if let Some(food_id) = input.food_id {
            let item = store
                .find_food(food_id)
                .ok_or_else(|| ApiError::Validation(format!("Unknown food item {}", food_id)))?;
            return Ok(LogPayload::Food(FoodLog {
                food_id: Some(item.id),
                name: item.name,
                calories: item.calories,
                protein: item.protein,
            }));
        }

        match (input.name, input.calories) {
            (Some(name), Some(calories)) if !name.trim().is_empty() => Ok(LogPayload::Food(FoodLog {
                food_id: None,
                name: name.trim().to_string(),
                calories,
                protein: input.protein.unwrap_or(0),
            })),
            _ => Err(ApiError::Validation(
                "Food log requires either foodId or name and calories".to_string(),
            )),
        }
    }
}

fn parse_payload<T: serde::de::DeserializeOwned>(raw: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(raw).map_err(|e| ApiError::Validation(format!("Invalid payload: {}", e)))
}

fn validate_notes(notes: Option<String>) -> Result<Option<String>, ApiError> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LEN => Err(ApiError::Validation(format!(
            "Notes must be at most {} characters",
            MAX_NOTES_LEN
        ))),
        other => Ok(other),
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound("Log entry not found".to_string())
}

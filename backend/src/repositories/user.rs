//! User repository

use super::StoreError;
use crate::store::MemoryStore;
use chrono::{DateTime, Utc};
use fittrack_shared::{GoalCategory, UserProfile};
use uuid::Uuid;

/// Stored user account
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    /// Lower-cased, unique
    pub email: String,
    pub password_hash: String,
    pub goal: Option<GoalCategory>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            goal: self.goal,
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            created_at: self.created_at,
        }
    }
}

/// Profile fields to change; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub goal: Option<GoalCategory>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

pub trait UserRepository: Send + Sync {
    /// Insert a user, failing if the email is taken
    fn insert_user(&self, user: UserRecord) -> Result<UserRecord, StoreError>;

    fn find_user(&self, id: Uuid) -> Option<UserRecord>;

    fn find_user_by_email(&self, email: &str) -> Option<UserRecord>;

    fn update_user(&self, id: Uuid, changes: UpdateUser) -> Option<UserRecord>;

    fn user_count(&self) -> usize;
}

impl UserRepository for MemoryStore {
    fn insert_user(&self, user: UserRecord) -> Result<UserRecord, StoreError> {
        let email = user.email.clone();
        if self
            .users
            .append_unless(user.clone(), |existing| existing.email == email)
        {
            Ok(user)
        } else {
            Err(StoreError::Conflict("Email already registered".to_string()))
        }
    }

    fn find_user(&self, id: Uuid) -> Option<UserRecord> {
        self.users.find(|user| user.id == id)
    }

    fn find_user_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.find(|user| user.email == email)
    }

    fn update_user(&self, id: Uuid, changes: UpdateUser) -> Option<UserRecord> {
        self.users.update(
            |user| user.id == id,
            |user| {
                if let Some(name) = changes.name {
                    user.name = name;
                }
                if let Some(goal) = changes.goal {
                    user.goal = Some(goal);
                }
                if let Some(age) = changes.age {
                    user.age = Some(age);
                }
                if let Some(weight) = changes.weight_kg {
                    user.weight_kg = Some(weight);
                }
                if let Some(height) = changes.height_cm {
                    user.height_cm = Some(height);
                }
                user.updated_at = Utc::now();
            },
        )
    }

    fn user_count(&self) -> usize {
        self.users.len()
    }
}

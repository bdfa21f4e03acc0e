//! User service for authentication and profile management

use crate::auth::{AuthError, JwtService, PasswordHasher};
use crate::error::ApiError;
use crate::repositories::{UpdateUser, UserRecord, UserRepository};
use chrono::Utc;
use fittrack_shared::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and sign them in
    ///
    /// Password hashing is offloaded to the blocking thread pool.
    pub async fn register<R>(
        repo: &R,
        jwt: &JwtService,
        passwords: &PasswordHasher,
        req: RegisterRequest,
    ) -> Result<AuthResponse, ApiError>
    where
        R: UserRepository + ?Sized,
    {
        let req = RegisterRequest {
            name: req.name.trim().to_string(),
            ..req
        };
        req.validate()?;

        let email = normalize_email(&req.email);
        if repo.find_user_by_email(&email).is_some() {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = passwords.hash_async(req.password).await?;

        let now = Utc::now();
        // insert_user re-checks the email under the write lock
        let user = repo.insert_user(UserRecord {
            id: Uuid::new_v4(),
            name: req.name,
            email,
            password_hash,
            goal: req.goal,
            age: req.age,
            weight_kg: req.weight_kg,
            height_cm: req.height_cm,
            created_at: now,
            updated_at: now,
        })?;

        info!(user_id = %user.id, "User registered");
        Self::issue(jwt, &user)
    }

    /// Login with email and password
    pub async fn login<R>(
        repo: &R,
        jwt: &JwtService,
        passwords: &PasswordHasher,
        req: LoginRequest,
    ) -> Result<AuthResponse, ApiError>
    where
        R: UserRepository + ?Sized,
    {
        let user = repo
            .find_user_by_email(&normalize_email(&req.email))
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = passwords
            .verify_async(req.password, user.password_hash.clone())
            .await?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        Self::issue(jwt, &user)
    }

    /// Get user profile
    pub fn get_profile<R>(repo: &R, user_id: Uuid) -> Result<UserProfile, ApiError>
    where
        R: UserRepository + ?Sized,
    {
        repo.find_user(user_id)
            .map(|user| user.to_profile())
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// Apply a partial profile update
    pub fn update_profile<R>(
        repo: &R,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError>
    where
        R: UserRepository + ?Sized,
    {
        let req = UpdateProfileRequest {
            name: req.name.map(|n| n.trim().to_string()),
            ..req
        };
        req.validate()?;

        let changes = UpdateUser {
            name: req.name,
            goal: req.goal,
            age: req.age,
            weight_kg: req.weight_kg,
            height_cm: req.height_cm,
        };

        repo.update_user(user_id, changes)
            .map(|user| user.to_profile())
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    fn issue(jwt: &JwtService, user: &UserRecord) -> Result<AuthResponse, ApiError> {
        Ok(AuthResponse {
            token: jwt.issue(user.id)?,
            token_type: "Bearer".to_string(),
            expires_in: jwt.expiry_secs(),
            user: user.to_profile(),
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

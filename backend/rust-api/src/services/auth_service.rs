use std::sync::Arc;

use anyhow::Context;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::middlewares::auth::JwtService;
use crate::models::user::{
    AuthResponse, LoginRequest, RegisterRequest, User, UserProfile, STARTING_CREDITS,
};
use crate::store::Store;

pub struct AuthService {
    store: Arc<dyn Store>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, jwt_service: JwtService) -> Self {
        Self { store, jwt_service }
    }

    /// Register a new user with the starting credit balance.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, ApiError> {
        let existing = self
            .store
            .find_user_by_email(&req.email)
            .await
            .context("Failed to check existing user")?;

        if existing.is_some() {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash =
            hash(&req.password, DEFAULT_COST).context("Failed to hash password")?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: req.email,
            name: req.name,
            password_hash,
            credits: STARTING_CREDITS,
            total_interviews: 0,
            avg_score: 0,
            created_at: Utc::now(),
        };

        self.store
            .put_user(&user)
            .await
            .context("Failed to save user")?;

        let token = self
            .jwt_service
            .generate_token(&user.id, &user.email)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to sign token: {}", e)))?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthResponse {
            message: "Registration successful".to_string(),
            token,
            user: UserProfile::from(user),
        })
    }

    /// Login with email and password. Unknown email and wrong password
    /// produce the same error.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, ApiError> {
        let invalid = || ApiError::Auth("Invalid credentials".to_string());

        let user = self
            .store
            .find_user_by_email(&req.email)
            .await
            .context("Failed to query user")?
            .ok_or_else(invalid)?;

        let password_ok =
            verify(&req.password, &user.password_hash).context("Failed to verify password")?;
        if !password_ok {
            tracing::warn!(email = %req.email, "Failed login attempt: invalid password");
            return Err(invalid());
        }

        let token = self
            .jwt_service
            .generate_token(&user.id, &user.email)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to sign token: {}", e)))?;

        tracing::info!(user_id = %user.id, "Successful login");

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            token,
            user: UserProfile::from(user),
        })
    }

    /// Public fields of the authenticated user.
    pub async fn current_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let user = self
            .store
            .get_user(user_id)
            .await
            .context("Failed to query user")?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserProfile::from(user))
    }
}

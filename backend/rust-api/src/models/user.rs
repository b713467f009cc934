use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Starting credit balance granted on registration.
pub const STARTING_CREDITS: i64 = 50;

/// User record stored under `users/{id}`.
///
/// Timestamps are serialized as RFC 3339 strings in both backends, matching
/// the wire format the API exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    /// Decremented by one per completed session; no floor, may go negative.
    pub credits: i64,
    #[serde(rename = "totalInterviews")]
    pub total_interviews: u32,
    /// Running average score across completed sessions, 0-100.
    #[serde(rename = "avgScore")]
    pub avg_score: u32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// User fields returned to the client (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub credits: i64,
    #[serde(rename = "totalInterviews")]
    pub total_interviews: u32,
    #[serde(rename = "avgScore")]
    pub avg_score: u32,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            name: user.name,
            credits: user.credits,
            total_interviews: user.total_interviews,
            avg_score: user.avg_score,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response after successful registration or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

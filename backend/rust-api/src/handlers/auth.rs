use axum::{
    extract::State, http::StatusCode, response::IntoResponse, Extension, Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::ApiError,
    extractors::AppJson,
    middlewares::auth::JwtClaims,
    models::user::{LoginRequest, RegisterRequest},
    services::{auth_service::AuthService, AppState},
};

/// POST /api/auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    tracing::info!("Registering new user: {}", req.email);

    let service = AuthService::new(state.store.clone(), state.jwt_service());
    let response = service.register(req).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    tracing::info!("Login attempt for user: {}", req.email);

    let service = AuthService::new(state.store.clone(), state.jwt_service());
    let response = service.login(req).await?;

    Ok(Json(response))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<impl IntoResponse, ApiError> {
    let service = AuthService::new(state.store.clone(), state.jwt_service());
    let user = service.current_user(&claims.sub).await?;

    Ok(Json(serde_json::json!({ "user": user })))
}

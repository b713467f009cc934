use axum::{extract::State, response::IntoResponse, Extension, Json};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    middlewares::auth::JwtClaims,
    services::{dashboard_service::DashboardService, AppState},
};

fn service(state: &AppState) -> DashboardService {
    DashboardService::new(state.store.clone(), state.llm.clone())
}

/// GET /api/dashboard/stats
pub async fn stats(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<impl IntoResponse, ApiError> {
    let response = service(&state).stats(&claims.sub).await?;
    Ok(Json(response))
}

/// GET /api/dashboard/insights
pub async fn insights(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<impl IntoResponse, ApiError> {
    let response = service(&state).insights(&claims.sub).await?;
    Ok(Json(response))
}

/// GET /api/dashboard/schedule
pub async fn schedule(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<JwtClaims>,
) -> Result<impl IntoResponse, ApiError> {
    let response = service(&state).schedule();
    Ok(Json(response))
}

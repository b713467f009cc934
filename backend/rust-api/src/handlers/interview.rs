use axum::{extract::State, response::IntoResponse, Extension, Json};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    extractors::AppJson,
    middlewares::auth::JwtClaims,
    models::interview::{
        CompleteInterviewRequest, StartInterviewRequest, SubmitAnswerRequest,
    },
    services::{interview_service::InterviewService, AppState},
};

fn service(state: &AppState) -> InterviewService {
    InterviewService::new(state.store.clone(), state.llm.clone())
}

/// POST /api/interview/start
pub async fn start(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
    AppJson(req): AppJson<StartInterviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(
        "Starting {} interview for user: {}",
        req.category,
        claims.sub
    );

    let response = service(&state).start(&claims.sub, req).await?;
    Ok(Json(response))
}

/// POST /api/interview/submit-answer
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
    AppJson(req): AppJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = service(&state).submit_answer(&claims.sub, req).await?;
    Ok(Json(response))
}

/// POST /api/interview/complete
pub async fn complete(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
    AppJson(req): AppJson<CompleteInterviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let results = service(&state).complete(&claims.sub, req).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "results": results,
    })))
}

/// GET /api/interview/history
pub async fn history(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<impl IntoResponse, ApiError> {
    let response = service(&state).history(&claims.sub).await?;
    Ok(Json(response))
}

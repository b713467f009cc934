use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::services::AppState;

pub mod auth;
pub mod dashboard;
pub mod interview;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store_healthy = match tokio::time::timeout(
        std::time::Duration::from_secs(1),
        state.store.ping(),
    )
    .await
    {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::error!("Store health check failed: {}", e);
            false
        }
        Err(_) => {
            tracing::error!("Store health check timed out");
            false
        }
    };

    let status_code = if store_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(json!({
            "status": if store_healthy { "healthy" } else { "degraded" },
            "service": "prepmate-api",
            "version": env!("CARGO_PKG_VERSION"),
            "store": {
                "backend": state.store.backend_name(),
                "status": if store_healthy { "healthy" } else { "unhealthy" },
            }
        })),
    )
}

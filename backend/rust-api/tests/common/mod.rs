use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use prepmate_api::store::{MemoryStore, Store};
use prepmate_api::{config::Config, create_router, services::AppState};

/// Builds an isolated app over the in-memory store with no LLM credentials,
/// so every test run is self-contained: questions and evaluations come from
/// the gateway's static fallbacks.
pub fn create_test_app() -> Router {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let config = Config {
        port: 0,
        mongo_uri: None,
        mongo_database: "prepmate-test".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_ttl_days: 7,
        groq_api_key: None,
        groq_api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
        groq_model: "llama-3.3-70b-versatile".to_string(),
    };

    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let app_state = Arc::new(AppState::new(config, store));

    create_router(app_state)
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: Value,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Registers a user and returns the bearer token.
pub async fn register_user(app: &Router, email: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "email": email,
            "password": "hunter2secret",
            "name": "Test Student",
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Starts an interview and returns its id.
pub async fn start_interview(app: &Router, token: &str, category: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/interview/start",
        serde_json::json!({ "category": category }),
        Some(token),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "start failed: {body}");
    body["interviewId"].as_str().unwrap().to_string()
}

/// Submits an answer to a question of an in-progress interview.
pub async fn submit_answer(
    app: &Router,
    token: &str,
    interview_id: &str,
    question_id: u32,
    answer: &str,
) -> (StatusCode, Value) {
    post_json(
        app,
        "/api/interview/submit-answer",
        serde_json::json!({
            "interviewId": interview_id,
            "questionId": question_id,
            "answer": answer,
        }),
        Some(token),
    )
    .await
}

/// Completes an interview and returns the results body.
pub async fn complete_interview(app: &Router, token: &str, interview_id: &str) -> Value {
    let (status, body) = post_json(
        app,
        "/api/interview/complete",
        serde_json::json!({ "interviewId": interview_id }),
        Some(token),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "complete failed: {body}");
    body
}

use axum::http::StatusCode;
use serde_json::json;

mod common;

use common::{create_test_app, get, post_json, register_user};

#[tokio::test]
async fn register_grants_starting_credits() {
    let app = create_test_app();

    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        json!({
            "email": "fresh@example.com",
            "password": "hunter2secret",
            "name": "Fresh Student",
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Registration successful");
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["credits"], 50);
    assert_eq!(body["user"]["totalInterviews"], 0);
    assert_eq!(body["user"]["avgScore"], 0);
    // No password material in the response
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = create_test_app();
    register_user(&app, "dup@example.com").await;

    let (status, body) = post_json(
        &app,
        "/api/auth/register",
        json!({
            "email": "dup@example.com",
            "password": "anotherpassword",
            "name": "Copycat",
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = create_test_app();

    let (status, _body) = post_json(
        &app,
        "/api/auth/register",
        json!({
            "email": "not-an-email",
            "password": "hunter2secret",
            "name": "Student",
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let app = create_test_app();

    let (status, _body) = post_json(
        &app,
        "/api/auth/register",
        json!({ "email": "someone@example.com" }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_returns_token_and_stats() {
    let app = create_test_app();
    register_user(&app, "login@example.com").await;

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({
            "email": "login@example.com",
            "password": "hunter2secret",
        }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["credits"], 50);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let app = create_test_app();
    register_user(&app, "known@example.com").await;

    let (wrong_status, wrong_body) = post_json(
        &app,
        "/api/auth/login",
        json!({
            "email": "known@example.com",
            "password": "wrong-password",
        }),
        None,
    )
    .await;

    let (unknown_status, unknown_body) = post_json(
        &app,
        "/api/auth/login",
        json!({
            "email": "ghost@example.com",
            "password": "hunter2secret",
        }),
        None,
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = create_test_app();
    let token = register_user(&app, "me@example.com").await;

    let (status, body) = get(&app, "/api/auth/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "me@example.com");
    assert_eq!(body["user"]["credits"], 50);
}

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let app = create_test_app();

    let (status, body) = get(&app, "/api/auth/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Access token required");
}

#[tokio::test]
async fn me_with_garbage_token_is_forbidden() {
    let app = create_test_app();

    let (status, body) = get(&app, "/api/auth/me", Some("garbage.token.here")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn health_reports_memory_backend() {
    let app = create_test_app();

    let (status, body) = get(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"]["backend"], "memory");
}

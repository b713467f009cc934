use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod llm;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use services::AppState;

pub fn create_router(app_state: std::sync::Arc<AppState>) -> Router {
    // The SPA is served from a separate origin in development
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/auth", auth_routes(app_state.clone()))
        .nest("/api/interview", interview_routes(app_state.clone()))
        .nest("/api/dashboard", dashboard_routes(app_state.clone()))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn auth_routes(app_state: std::sync::Arc<AppState>) -> Router<std::sync::Arc<AppState>> {
    let public_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let protected_routes = Router::new()
        .route("/me", get(handlers::auth::me))
        .route_layer(middleware::from_fn_with_state(
            app_state,
            middlewares::auth::auth_middleware,
        ));

    public_routes.merge(protected_routes)
}

fn interview_routes(app_state: std::sync::Arc<AppState>) -> Router<std::sync::Arc<AppState>> {
    Router::new()
        .route("/start", post(handlers::interview::start))
        .route("/submit-answer", post(handlers::interview::submit_answer))
        .route("/complete", post(handlers::interview::complete))
        .route("/history", get(handlers::interview::history))
        .route_layer(middleware::from_fn_with_state(
            app_state,
            middlewares::auth::auth_middleware,
        ))
}

fn dashboard_routes(app_state: std::sync::Arc<AppState>) -> Router<std::sync::Arc<AppState>> {
    Router::new()
        .route("/stats", get(handlers::dashboard::stats))
        .route("/insights", get(handlers::dashboard::insights))
        .route("/schedule", get(handlers::dashboard::schedule))
        .route_layer(middleware::from_fn_with_state(
            app_state,
            middlewares::auth::auth_middleware,
        ))
}

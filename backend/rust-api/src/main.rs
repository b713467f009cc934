use std::sync::Arc;

use prepmate_api::store::{MemoryStore, MongoStore, Store};
use prepmate_api::{config::Config, create_router, services::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prepmate_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Prepmate API");

    let config = Config::load().expect("Failed to load configuration");

    // Backend selection happens once here; services only ever see the trait
    let store: Arc<dyn Store> = match config.mongo_uri {
        Some(ref uri) => {
            let client = mongodb::Client::with_uri_str(uri)
                .await
                .expect("Failed to connect to MongoDB");
            tracing::info!("MongoDB connected");
            Arc::new(MongoStore::new(client.database(&config.mongo_database)))
        }
        None => {
            tracing::warn!(
                "MONGO_URI not set. Using in-memory store for development; data will not persist."
            );
            Arc::new(MemoryStore::new())
        }
    };

    let port = config.port;
    let app_state = Arc::new(AppState::new(config, store));
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind listener");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

use std::sync::Arc;

use crate::config::Config;
use crate::llm::LlmClient;
use crate::middlewares::auth::JwtService;
use crate::store::Store;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub llm: Arc<LlmClient>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn Store>) -> Self {
        let llm = Arc::new(LlmClient::new(
            config.groq_api_key.clone(),
            config.groq_api_url.clone(),
            config.groq_model.clone(),
        ));

        tracing::info!("Using {} store backend", store.backend_name());

        Self { config, store, llm }
    }

    pub fn jwt_service(&self) -> JwtService {
        JwtService::new(&self.config.jwt_secret, self.config.jwt_ttl_days)
    }
}

pub mod auth_service;
pub mod dashboard_service;
pub mod interview_service;

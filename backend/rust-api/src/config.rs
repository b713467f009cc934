use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Managed document-store URI. Absent => in-memory store (development).
    pub mongo_uri: Option<String>,
    pub mongo_database: String,
    pub jwt_secret: String,
    pub jwt_ttl_days: i64,
    /// Groq API key. Absent => LLM gateway serves static fallback content.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub groq_model: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("config/{}", app_env)).required(false), // Allow missing config file, fallback to ENV
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        let port = settings
            .get_string("server.port")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);

        let mongo_uri = settings
            .get_string("database.mongo_uri")
            .or_else(|_| env::var("MONGO_URI"))
            .ok();

        let mongo_database = settings
            .get_string("database.mongo_database")
            .or_else(|_| env::var("MONGO_DATABASE"))
            .unwrap_or_else(|_| "prepmate".to_string());

        let jwt_secret = settings
            .get_string("auth.jwt_secret")
            .or_else(|_| env::var("JWT_SECRET"))
            .unwrap_or_else(|_| {
                if app_env == "prod" {
                    panic!("FATAL: JWT_SECRET must be set in production!");
                }
                eprintln!("WARNING: Using default JWT_SECRET (dev mode only!)");
                "dev-secret-only-for-local-testing".to_string()
            });

        let jwt_ttl_days = settings
            .get_string("auth.jwt_ttl_days")
            .or_else(|_| env::var("JWT_TTL_DAYS"))
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(7);

        let groq_api_key = settings
            .get_string("groq.api_key")
            .or_else(|_| env::var("GROQ_API_KEY"))
            .ok()
            .filter(|key| !key.is_empty());

        let groq_api_url = settings
            .get_string("groq.api_url")
            .or_else(|_| env::var("GROQ_API_URL"))
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1/chat/completions".to_string());

        let groq_model = settings
            .get_string("groq.model")
            .or_else(|_| env::var("GROQ_MODEL"))
            .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        Ok(Config {
            port,
            mongo_uri,
            mongo_database,
            jwt_secret,
            jwt_ttl_days,
            groq_api_key,
            groq_api_url,
            groq_model,
        })
    }
}

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use yeschef_recipe::OpenAiConfig;
use yeschef_shopping::DEFAULT_PREFERRED_STORE;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub llm: OpenAiConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Used for grocery prices when the user has not set a location.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_preferred_store")]
    pub preferred_store: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            location: None,
            preferred_store: default_preferred_store(),
        }
    }
}

fn default_preferred_store() -> String {
    DEFAULT_PREFERRED_STORE.to_owned()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (`DATABASE_URL`, `OPENAI_API_KEY`)
    /// 2. Environment variables (`YESCHEF__DATABASE__URL`, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:yeschef.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("YESCHEF")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_key) = env::var("OPENAI_API_KEY") {
            builder = builder.set_override("llm.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Serving additionally needs an API key for recipe generation.
    pub fn validate(&self, serving: bool) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_owned());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if serving && self.llm.api_key.trim().is_empty() {
            return Err("An LLM API key is required (llm.api_key or OPENAI_API_KEY)".to_owned());
        }
        Ok(())
    }

    /// The configured pricing location, ignoring blanks.
    pub fn pricing_location(&self) -> Option<&str> {
        self.pricing
            .location
            .as_deref()
            .map(str::trim)
            .filter(|location| !location.is_empty())
    }
}

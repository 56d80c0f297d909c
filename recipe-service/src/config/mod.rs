use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Database holding both the `recipes` and `logs` collections.
pub const DATABASE_NAME: &str = "recipesdb";

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl RecipeConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(RecipeConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: require_env("MONGODB_URI")?,
                database: DATABASE_NAME.to_string(),
            },
        })
    }
}

fn require_env(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| {
        AppError::ConfigError(anyhow::anyhow!(format!("{} is required but not set", key)))
    })
}

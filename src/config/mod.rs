use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Dog CEO API base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum number of images kept from one search
    #[serde(default = "default_max_images")]
    pub max_images: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "https://dog.ceo/api".to_string()
}
fn default_max_images() -> usize {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_images: default_max_images(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse a JSON config document. Omitted fields take their defaults.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(contents)?;

        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        if config.api.base_url.is_empty() {
            return Err(ConfigError::Invalid("api.base_url is empty".to_string()));
        }
        if config.api.max_images == 0 {
            return Err(ConfigError::Invalid("api.max_images must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// Log level for the browser console subscriber; unknown names fall back to INFO.
    pub fn log_level(&self) -> tracing::Level {
        self.logging
            .level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

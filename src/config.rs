// src/config.rs
use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";
pub const DEFAULT_PORT: u16 = 8000;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub environment: String,
    pub port: u16,
    pub upstream_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub history_limit: usize,
    pub referer: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            environment: "production".to_string(),
            port: DEFAULT_PORT,
            upstream_url: OPENROUTER_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 250,
            history_limit: 5,
            referer: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // An empty key is as good as no key.
        config.api_key = lookup("OPENROUTER_API_KEY").filter(|k| !k.trim().is_empty());

        if let Some(environment) = lookup("ENV") {
            config.environment = environment;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got {port:?}")))?;
        }

        if let Some(url) = lookup("OPENROUTER_URL") {
            config.upstream_url = url;
        }

        if let Some(secs) = lookup("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AppError::Config(format!("UPSTREAM_TIMEOUT_SECS must be whole seconds, got {secs:?}"))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

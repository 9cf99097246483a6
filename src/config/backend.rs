use crate::core::{AppError, Result};
use std::env;
use std::time::Duration;

/// Connection settings for the upstream rates backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    /// Maximum age of a cached collection; 0 refetches on every read
    pub cache_ttl_secs: u64,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout_secs: 30,
            cache_ttl_secs: 30,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(BackendConfig {
            base_url: env::var("BACKEND_BASE_URL")
                .map_err(|_| AppError::Configuration("BACKEND_BASE_URL not set".to_string()))?,
            api_token: env::var("BACKEND_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            timeout_secs: env::var("BACKEND_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid BACKEND_TIMEOUT_SECS".to_string())
                })?,
            cache_ttl_secs: env::var("BACKEND_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid BACKEND_CACHE_TTL_SECS".to_string())
                })?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Configuration(format!(
                "BACKEND_BASE_URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Backend timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

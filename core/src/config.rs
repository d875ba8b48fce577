//! Runtime configuration read from the environment.

use std::env;

/// Environment variable holding the API base URL.
pub const API_BASE_ENV: &str = "TODO_API_BASE";

/// Base URL used when `TODO_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to the
    /// local development backend.
    pub fn from_env() -> Self {
        let base_url = env::var(API_BASE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

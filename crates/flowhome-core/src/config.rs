use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Root configuration for the flowhome client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Remote API configuration.
    pub api: ApiConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = substitute_env_vars(content);

        toml::from_str(&content)
            .map_err(|e| ApiError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Build a configuration pointing at the given base URL, with defaults
    /// for everything else.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: url.into(),
                request_timeout_secs: None,
            },
        }
    }
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote REST service, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means no timeout: a hung
    /// request blocks only its own controller's loading state.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Base URL with any trailing slash removed.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    let mut result = content.to_string();
    let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

/// Configuration for the Strato CLI
///
/// Resolution order for each setting: command-line flag, environment
/// variable, config file, built-in default.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_API_URL;
use crate::error::{Error, Result};

pub const TOKEN_ENV: &str = "STRATO_TOKEN";
pub const API_URL_ENV: &str = "STRATO_API_URL";

/// Persisted CLI configuration file (`~/.config/strato/config.yaml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// API token. Prefer the STRATO_TOKEN environment variable over
    /// storing the token on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// API base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl CliConfig {
    /// Load configuration from a YAML file. A missing file is not an
    /// error; it yields the empty config.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::InvalidArgument(format!("invalid config file: {}", e)))
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("strato").join("config.yaml"))
    }

    /// Resolve the API token from flag, environment, or file.
    pub fn resolve_token(&self, flag: Option<&str>) -> Result<String> {
        flag.map(str::to_string)
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .or_else(|| self.token.clone())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "API token not found. Set {} or pass --token",
                    TOKEN_ENV
                ))
            })
    }

    /// Resolve the API base URL from flag, environment, or file.
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_default() {
        let config = CliConfig::from_file("/nonexistent/strato.yaml").unwrap();
        assert!(config.token.is_none());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_flag_wins_over_file() {
        let config = CliConfig {
            token: Some("file-token".into()),
            api_url: Some("https://file.example".into()),
        };
        assert_eq!(
            config.resolve_token(Some("flag-token")).unwrap(),
            "flag-token"
        );
        assert_eq!(
            config.resolve_api_url(Some("https://flag.example")),
            "https://flag.example"
        );
    }
}

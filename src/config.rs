use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://share.example.com`.
    pub origin: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_text_files_path")]
    pub text_files_path: String,
    #[serde(default = "default_images_path")]
    pub images_path: String,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_text_files_path() -> String {
    "/api/text-files".to_string()
}
fn default_images_path() -> String {
    "/api/images".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Environment variable holding the shared API secret.
    #[serde(default = "default_secret_env")]
    pub secret_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_env: default_secret_env(),
        }
    }
}

fn default_secret_env() -> String {
    "SHARE_API_TOKEN".to_string()
}

impl Config {
    /// Configuration pointing at `origin` with every other value defaulted.
    pub fn for_origin(origin: &str) -> Self {
        Self {
            api: ApiConfig {
                origin: origin.to_string(),
                timeout_secs: default_timeout_secs(),
                text_files_path: default_text_files_path(),
                images_path: default_images_path(),
            },
            auth: AuthConfig::default(),
        }
    }

    /// Check values that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.api.origin.trim();
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api.origin must be an http(s) URL, got '{}'",
                self.api.origin
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_secs must be > 0".to_string(),
            ));
        }
        for (key, path) in [
            ("api.text_files_path", &self.api.text_files_path),
            ("api.images_path", &self.api.images_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with '/', got '{}'",
                    key, path
                )));
            }
        }
        if self.auth.secret_env.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "auth.secret_env must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    config.validate()?;

    Ok(config)
}

//! Startup wiring.
//!
//! [`AppContext`] is built once from a validated [`Config`] before any
//! command runs. Resolving the shared secret happens here, so a missing
//! secret stops the process with `ConfigError::MissingSecret`
//! before a client exists.

use anyhow::Result;
use std::sync::Arc;

use crate::auth::{Secret, TokenGenerator};
use crate::client::ApiClient;
use crate::config::Config;
use crate::listing::{ImageListing, TextListing};

pub struct AppContext {
    pub config: Arc<Config>,
    pub tokens: TokenGenerator,
    pub client: Arc<ApiClient>,
}

impl AppContext {
    /// Resolve the secret from the environment and build the client.
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let secret = Secret::from_env(&config.auth.secret_env)?;
        Self::with_secret(config, secret)
    }

    pub fn with_secret(config: Config, secret: Secret) -> Result<Self> {
        let tokens = TokenGenerator::new(secret);
        let client = Arc::new(ApiClient::new(&config.api, tokens.clone())?);
        Ok(Self {
            config: Arc::new(config),
            tokens,
            client,
        })
    }

    pub fn text_listing(&self) -> TextListing {
        TextListing::new(self.client.clone(), &self.config.api.text_files_path)
    }

    pub fn image_listing(&self) -> ImageListing {
        ImageListing::new(self.client.clone(), &self.config.api.images_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_missing_secret_stops_startup() {
        let mut config = Config::for_origin("http://localhost:945");
        config.auth.secret_env = "SHARE_CONTEXT_TEST_UNSET_SECRET".to_string();
        let err = AppContext::from_config(config).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingSecret { .. })
        ));
    }

    #[test]
    fn test_with_secret_builds_listings() {
        let config = Config::for_origin("http://localhost:945");
        let ctx = AppContext::with_secret(config, Secret::new("s").unwrap()).unwrap();
        assert_eq!(ctx.client.origin(), "http://localhost:945");
        assert_eq!(ctx.tokens.generate().len(), 16);
    }
}

//! Authenticated HTTP access to the share backend.
//!
//! Every request carries a fresh `X-API-Token` header. There is no retry
//! and no caching; each call is one GET bounded by `[api].timeout_secs`.

use reqwest::Response;
use serde::de::DeserializeOwned;
use share_core::token::TOKEN_HEADER;
use std::time::Duration;
use tracing::debug;

use crate::auth::TokenGenerator;
use crate::config::ApiConfig;
use crate::error::FetchError;

pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
    tokens: TokenGenerator,
}

impl ApiClient {
    pub fn new(api: &ApiConfig, tokens: TokenGenerator) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            origin: api.origin.trim().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL for a backend path or an already-absolute URL.
    pub fn resolve(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else if path_or_url.starts_with('/') {
            format!("{}{}", self.origin, path_or_url)
        } else {
            format!("{}/{}", self.origin, path_or_url)
        }
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(url, "GET");
        let resp = self
            .http
            .get(url)
            .header(TOKEN_HEADER, self.tokens.generate())
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(resp)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.resolve(path);
        let body = self
            .get(&url)
            .await?
            .bytes()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }

    /// GET `path_or_url` and return the raw body.
    pub async fn get_bytes(&self, path_or_url: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.resolve(path_or_url);
        let body = self
            .get(&url)
            .await?
            .bytes()
            .await
            .map_err(|source| FetchError::Network { url, source })?;
        Ok(body.to_vec())
    }
}

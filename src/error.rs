//! Typed failures at the crate's seams.
//!
//! Command and configuration code returns `anyhow::Result`; these enums
//! exist where a caller needs to tell failure kinds apart.

use reqwest::StatusCode;
use thiserror::Error;

/// Startup configuration failures. Any of these stops the process before
/// a client is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The shared API secret is not set (or set to an empty value).
    #[error("{var} environment variable is required for API authentication")]
    MissingSecret { var: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Why a listing fetch failed. Absorbed at the listing boundary, where it
/// is logged and replaced with an empty listing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} returned a malformed body: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single user action (download, share) that could not complete.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("download failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} has no file name to save under")]
    NoFileName(String),
}

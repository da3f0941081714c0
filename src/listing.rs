//! Listing normalizers for the two backend resources.
//!
//! A [`ListingSource`] fetches one raw listing and normalizes it with
//! `share_core::normalize`. Callers use [`ListingSource::fetch_listing`],
//! which never fails: any [`FetchError`] is logged with its reason and
//! turned into an empty listing, so views render an empty state instead of
//! an error. [`ListingSource::fetch`] keeps the `Result` for callers that
//! need to tell "truly empty" from "fetch failed".
//!
//! # Workflow
//!
//! 1. Build a fresh `X-API-Token` for the current minute.
//! 2. `GET` the listing endpoint once.
//! 3. Decode `[{path, content}]` (text) or `[String]` (images).
//! 4. Normalize, sort by name, stamp synthetic `created_at` values.

use async_trait::async_trait;
use chrono::Utc;
use share_core::models::{ImageEntry, ListingKind, RawTextFile, TextEntry};
use share_core::normalize::{normalize_images, normalize_text_files};
use std::sync::Arc;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::FetchError;

#[async_trait]
pub trait ListingSource: Send + Sync {
    type Entry: Send + Sync;

    fn kind(&self) -> ListingKind;

    /// Fetch and normalize, reporting failures.
    async fn fetch(&self) -> Result<Vec<Self::Entry>, FetchError>;

    /// Fetch and normalize; failures become an empty listing.
    async fn fetch_listing(&self) -> Vec<Self::Entry> {
        match self.fetch().await {
            Ok(entries) => {
                info!(kind = %self.kind(), count = entries.len(), "listing fetched");
                entries
            }
            Err(err) => {
                warn!(kind = %self.kind(), error = %err, "listing fetch failed, serving empty listing");
                Vec::new()
            }
        }
    }
}

/// The snippet archive, `GET /api/text-files`.
pub struct TextListing {
    client: Arc<ApiClient>,
    path: String,
}

impl TextListing {
    pub fn new(client: Arc<ApiClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ListingSource for TextListing {
    type Entry = TextEntry;

    fn kind(&self) -> ListingKind {
        ListingKind::Text
    }

    async fn fetch(&self) -> Result<Vec<TextEntry>, FetchError> {
        let raw: Vec<RawTextFile> = self.client.get_json(&self.path).await?;
        Ok(normalize_text_files(raw, Utc::now()))
    }
}

/// The image gallery, `GET /api/images`.
pub struct ImageListing {
    client: Arc<ApiClient>,
    path: String,
}

impl ImageListing {
    pub fn new(client: Arc<ApiClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ListingSource for ImageListing {
    type Entry = ImageEntry;

    fn kind(&self) -> ListingKind {
        ListingKind::Image
    }

    async fn fetch(&self) -> Result<Vec<ImageEntry>, FetchError> {
        let raw: Vec<String> = self.client.get_json(&self.path).await?;
        Ok(normalize_images(raw))
    }
}

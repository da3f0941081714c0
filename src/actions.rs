//! Download and share actions on a single entry.
//!
//! Actions only read already-normalized fields (`content`, `url`, `name`).
//! A failing action yields a failure [`Notice`] for the user and leaves
//! everything else running.

use share_core::models::{ImageEntry, ListingKind, TextEntry};
use share_core::naming::file_name;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ActionError;

/// Transient user notification for an action outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub failed: bool,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            failed: false,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            failed: true,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Public link to an entry's detail page.
pub fn share_link(origin: &str, kind: ListingKind, id: &str) -> String {
    let route = match kind {
        ListingKind::Text => "file",
        ListingKind::Image => "image",
    };
    format!("{}/{}/{}", origin.trim_end_matches('/'), route, id)
}

fn target_path(dir: &Path, name: &str) -> Result<PathBuf, ActionError> {
    match name {
        "" | "." | ".." => Err(ActionError::NoFileName(name.to_string())),
        _ => Ok(dir.join(name)),
    }
}

/// Write a text entry's content into `dir` under its file name.
pub async fn save_text(entry: &TextEntry, dir: &Path) -> Result<PathBuf, ActionError> {
    let path = target_path(dir, &entry.name)?;
    tokio::fs::write(&path, entry.content.as_bytes())
        .await
        .map_err(|source| ActionError::Write {
            path: path.display().to_string(),
            source,
        })?;
    Ok(path)
}

/// Fetch an image from the backend and write it into `dir`.
pub async fn download_image(
    client: &ApiClient,
    entry: &ImageEntry,
    dir: &Path,
) -> Result<PathBuf, ActionError> {
    let path = target_path(dir, file_name(&entry.url))?;
    let bytes = client.get_bytes(&entry.url).await?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| ActionError::Write {
            path: path.display().to_string(),
            source,
        })?;
    Ok(path)
}

/// Turn an action result into the notice shown to the user.
pub fn notice_for(name: &str, result: &Result<PathBuf, ActionError>) -> Notice {
    match result {
        Ok(path) => Notice::success(
            "Download ready",
            format!("{} saved to {}", name, path.display()),
        ),
        Err(err) => {
            warn!(name, error = %err, "download failed");
            Notice::failure("Download failed", err.to_string())
        }
    }
}

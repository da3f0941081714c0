//! Listing data models.
//!
//! Raw records are what the backend returns; entries are the normalized,
//! display-ready values built from them by [`crate::normalize`]. Entries
//! are immutable once built: a refetch produces a new `Vec`, never an
//! in-place patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record of `GET /api/text-files`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTextFile {
    pub path: String,
    pub content: String,
}

/// A normalized text snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEntry {
    /// Slug of the source path, or `entry-<n>` when the slug is empty.
    pub id: String,
    /// Final path segment, extension included.
    pub name: String,
    /// Raw payload as returned by the backend.
    pub content: String,
    pub mime_type: String,
    /// `"<N> KB"`, never below `1 KB`.
    pub size_label: String,
    pub preview: String,
    pub description: String,
    /// Synthetic ordering timestamp, not a real creation time.
    pub created_at: DateTime<Utc>,
}

/// A normalized gallery image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    /// Slug of the URL path, or `image-<n>` when the slug is empty.
    pub id: String,
    /// Title-cased file stem.
    pub name: String,
    /// Raw path or URL as returned by the backend.
    pub url: String,
    pub category: String,
    pub description: String,
    /// Synthetic ordering timestamp, not a real creation time.
    pub created_at: DateTime<Utc>,
}

/// Which backend listing an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Text,
    Image,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Text => "text",
            ListingKind::Image => "image",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_raw_text_file_deserializes() {
        let raw: Vec<RawTextFile> =
            serde_json::from_str(r##"[{"path":"/api/text/a.md","content":"# A"}]"##).unwrap();
        assert_eq!(raw[0].path, "/api/text/a.md");
        assert_eq!(raw[0].content, "# A");
    }

    #[test]
    fn test_entries_serialize_camel_case() {
        let entry = ImageEntry {
            id: "images-a".to_string(),
            name: "A".to_string(),
            url: "/images/a.png".to_string(),
            category: "General".to_string(),
            description: "A capture from the General lane.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("created_at").is_none());
    }
}

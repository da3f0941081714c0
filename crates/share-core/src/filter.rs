//! Client-side search and detail lookup over a fetched listing.
//!
//! Text entries match on name or content, images on name or description.
//! Matching is a case-insensitive substring test; an empty query matches
//! everything.

use crate::models::{ImageEntry, TextEntry};

/// An entry that can be searched and addressed by id.
pub trait Searchable {
    fn id(&self) -> &str;

    /// Whether any searchable field contains `needle`, which is already
    /// lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool;
}

impl Searchable for TextEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

impl Searchable for ImageEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Entries matching `query`, in listing order.
pub fn filter_entries<'a, T: Searchable>(entries: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| needle.is_empty() || entry.matches_lowercase(&needle))
        .collect()
}

/// Look up one entry by id. `None` is the not-found state, not an error.
pub fn find_by_id<'a, T: Searchable>(entries: &'a [T], id: &str) -> Option<&'a T> {
    entries.iter().find(|entry| entry.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTextFile;
    use crate::normalize::{normalize_images, normalize_text_files};
    use chrono::Utc;

    fn texts() -> Vec<TextEntry> {
        normalize_text_files(
            vec![
                RawTextFile {
                    path: "/api/text/deploy.sh".to_string(),
                    content: "#!/bin/sh\nkubectl apply -f k8s/".to_string(),
                },
                RawTextFile {
                    path: "/api/text/Notes.md".to_string(),
                    content: "Grocery list".to_string(),
                },
            ],
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let entries = texts();
        assert_eq!(filter_entries(&entries, "").len(), 2);
    }

    #[test]
    fn test_text_matches_name_case_insensitively() {
        let entries = texts();
        let hits = filter_entries(&entries, "NOTES");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Notes.md");
    }

    #[test]
    fn test_text_matches_content() {
        let entries = texts();
        let hits = filter_entries(&entries, "Kubectl");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "deploy.sh");
    }

    #[test]
    fn test_image_matches_description_not_url() {
        let images = normalize_images(vec![
            "/images/travel/istanbul-bridge.jpg".to_string(),
            "/images/ui/login.png".to_string(),
        ]);
        assert_eq!(filter_entries(&images, "travel lane").len(), 1);
        assert_eq!(filter_entries(&images, "bridge").len(), 1);
        assert!(filter_entries(&images, ".png").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let entries = texts();
        assert_eq!(
            find_by_id(&entries, "api-text-deploy").map(|e| e.name.as_str()),
            Some("deploy.sh")
        );
        assert!(find_by_id(&entries, "missing").is_none());
    }
}

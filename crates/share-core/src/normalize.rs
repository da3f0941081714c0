//! Raw listing → normalized entries.
//!
//! Both listings go through the same three steps:
//!
//! 1. Map each raw record to an entry, remembering its 1-based position in
//!    the backend response for fallback ids (`entry-<n>`, `image-<n>`).
//! 2. Stable-sort by display name. Names compare case-insensitively first,
//!    then by exact bytes, so the order never depends on backend order
//!    unless two names are identical.
//! 3. Stamp `created_at` as `base + index days` over the sorted order.
//!
//! Text listings use January 1 of the current UTC year as base; image
//! listings use 2024-01-01T00:00:00Z.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use std::cmp::Ordering;

use crate::mime::mime_for_extension;
use crate::models::{ImageEntry, RawTextFile, TextEntry};
use crate::naming::{
    extension, file_name, normalize_whitespace, segment_count, slugify, strip_extension,
    title_case,
};

/// Maximum preview length in characters, ellipsis excluded.
pub const PREVIEW_CHARS: usize = 220;

const ELLIPSIS: char = '…';

/// 2024-01-01T00:00:00Z.
const IMAGE_BASE_TIMESTAMP: i64 = 1_704_067_200;

const DEFAULT_CATEGORY: &str = "general";

/// Base date for text listings: January 1 of `now`'s UTC year.
pub fn text_base_date(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Fixed base date for image listings.
pub fn image_base_date() -> DateTime<Utc> {
    DateTime::from_timestamp(IMAGE_BASE_TIMESTAMP, 0).unwrap_or_default()
}

/// First [`PREVIEW_CHARS`] characters of the whitespace-normalized content,
/// with `…` appended when truncated.
pub fn preview(content: &str) -> String {
    let normalized = normalize_whitespace(content.trim());
    if normalized.chars().count() <= PREVIEW_CHARS {
        return normalized;
    }
    let mut truncated: String = normalized.chars().take(PREVIEW_CHARS).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Human size of the UTF-8 payload in KB, one decimal, at least `1 KB`.
pub fn size_label(content: &str) -> String {
    let kb = (content.len() as f64 / 1024.0 * 10.0).round() / 10.0;
    format!("{} KB", kb.max(1.0))
}

/// First line of the trimmed content, or an excerpt label for the file.
pub fn describe_text(content: &str, name: &str) -> String {
    let first_line = content
        .trim()
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches('\r');
    if first_line.is_empty() {
        format!("Excerpt from {}", name)
    } else {
        first_line.to_string()
    }
}

/// Synthetic sentence shown under an image.
pub fn describe_image(name: &str, category: &str) -> String {
    format!("{} capture from the {} lane.", name, category)
}

/// Normalize one raw text record. `position` is 1-based.
///
/// `created_at` is left at `base`; [`normalize_text_files`] re-stamps it.
pub fn normalize_text_file(raw: RawTextFile, position: usize, base: DateTime<Utc>) -> TextEntry {
    let name = file_name(&raw.path).to_string();
    let mime_type = mime_for_extension(&extension(&name));
    let id = non_empty_or(slugify(strip_extension(&raw.path)), || {
        format!("entry-{}", position)
    });

    TextEntry {
        id,
        mime_type,
        size_label: size_label(&raw.content),
        preview: preview(&raw.content),
        description: describe_text(&raw.content, &name),
        name,
        content: raw.content,
        created_at: base,
    }
}

/// Normalize one raw image URL. `position` is 1-based.
pub fn normalize_image(url: String, position: usize, base: DateTime<Utc>) -> ImageEntry {
    let name = title_case(strip_extension(file_name(&url)));
    let category = image_category(&url);
    let id = non_empty_or(slugify(strip_extension(&url)), || {
        format!("image-{}", position)
    });

    ImageEntry {
        id,
        description: describe_image(&name, &category),
        name,
        category,
        url,
        created_at: base,
    }
}

/// Title-cased parent directory for paths with more than three segments,
/// `General` otherwise.
pub fn image_category(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').collect();
    let raw = if segment_count(url) > 3 {
        segments[segments.len() - 2]
    } else {
        DEFAULT_CATEGORY
    };
    non_empty_or(title_case(raw), || title_case(DEFAULT_CATEGORY))
}

/// Build the text listing from a backend response.
pub fn normalize_text_files(raw: Vec<RawTextFile>, now: DateTime<Utc>) -> Vec<TextEntry> {
    let base = text_base_date(now);
    let mut entries: Vec<TextEntry> = raw
        .into_iter()
        .enumerate()
        .map(|(i, record)| normalize_text_file(record, i + 1, base))
        .collect();
    order_and_stamp(&mut entries, base);
    entries
}

/// Build the image listing from a backend response.
pub fn normalize_images(raw: Vec<String>) -> Vec<ImageEntry> {
    let base = image_base_date();
    let mut entries: Vec<ImageEntry> = raw
        .into_iter()
        .enumerate()
        .map(|(i, url)| normalize_image(url, i + 1, base))
        .collect();
    order_and_stamp(&mut entries, base);
    entries
}

/// Entries that carry a display name and a synthetic timestamp.
trait Stamped {
    fn display_name(&self) -> &str;
    fn stamp(&mut self, at: DateTime<Utc>);
}

impl Stamped for TextEntry {
    fn display_name(&self) -> &str {
        &self.name
    }
    fn stamp(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}

impl Stamped for ImageEntry {
    fn display_name(&self) -> &str {
        &self.name
    }
    fn stamp(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}

/// Collation used for every listing.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn order_and_stamp<T: Stamped>(entries: &mut [T], base: DateTime<Utc>) {
    entries.sort_by(|a, b| compare_names(a.display_name(), b.display_name()));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.stamp(base + Duration::days(index as i64));
    }
}

fn non_empty_or(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        fallback()
    } else {
        value
    }
}

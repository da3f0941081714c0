//! Path and display-name helpers.
//!
//! Everything the normalizer derives from a raw path goes through these
//! functions: slug ids, file names, extensions, and title-cased labels.
//!
//! # Example
//!
//! ```rust
//! use share_core::naming::{slugify, strip_extension, title_case};
//!
//! assert_eq!(slugify(strip_extension("src/app.tsx")), "src-app");
//! assert_eq!(title_case("dashboard-dark"), "Dashboard Dark");
//! ```

/// Convert a value into a URL-safe slug.
///
/// The value is lowercased, every run of characters outside `[a-z0-9]`
/// becomes a single `-`, and no leading or trailing `-` is kept. The
/// result may be empty; callers supply their own fallback.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Title-case a value, treating `-`, `_`, and whitespace runs as word
/// boundaries. Only the first character of each word is changed.
pub fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapse every whitespace run into a single space and trim the ends.
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Final `/`-separated segment of a path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lowercased extension of a file name, or `""` when it has none.
pub fn extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Strip a trailing `.ext` from the last segment of a path.
///
/// Directories are never touched, so `a.b/c` stays as is. A trailing dot
/// with nothing after it is not an extension.
pub fn strip_extension(path: &str) -> &str {
    let segment_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[segment_start..].rfind('.') {
        Some(dot) if segment_start + dot + 1 < path.len() => &path[..segment_start + dot],
        _ => path,
    }
}

/// Number of `/`-separated segments, counting empty ones.
///
/// `/images/ui/a.png` has four segments: `""`, `images`, `ui`, `a.png`.
pub fn segment_count(path: &str) -> usize {
    path.split('/').count()
}

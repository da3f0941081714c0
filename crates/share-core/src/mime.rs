//! MIME type lookup for text entries.
//!
//! | Extension | MIME Type |
//! |-----------|-----------|
//! | `txt` | `text/plain` |
//! | `md` | `text/markdown` |
//! | `js` | `application/javascript` |
//! | `ts` | `application/typescript` |
//! | `tsx` | `text/tsx` |
//! | `jsx` | `text/jsx` |
//! | `json` | `application/json` |
//! | `css` | `text/css` |
//! | `html` | `text/html` |
//! | `py` | `text/x-python` |
//! | `sh` | `application/x-sh` |
//! | `yml`, `yaml` | `text/yaml` |
//! | Other | `text/<extension>` |
//! | None | `text/plain` |

const MIME_TABLE: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("js", "application/javascript"),
    ("ts", "application/typescript"),
    ("tsx", "text/tsx"),
    ("jsx", "text/jsx"),
    ("json", "application/json"),
    ("css", "text/css"),
    ("html", "text/html"),
    ("py", "text/x-python"),
    ("sh", "application/x-sh"),
    ("yml", "text/yaml"),
    ("yaml", "text/yaml"),
];

/// Resolve the MIME type for a lowercase extension.
pub fn mime_for_extension(extension: &str) -> String {
    if extension.is_empty() {
        return "text/plain".to_string();
    }
    MIME_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| mime.to_string())
        .unwrap_or_else(|| format!("text/{}", extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(mime_for_extension("tsx"), "text/tsx");
        assert_eq!(mime_for_extension("sh"), "application/x-sh");
        assert_eq!(mime_for_extension("yml"), mime_for_extension("yaml"));
    }

    #[test]
    fn test_unknown_extension_falls_back_to_text() {
        assert_eq!(mime_for_extension("rs"), "text/rs");
        assert_eq!(mime_for_extension(""), "text/plain");
    }
}

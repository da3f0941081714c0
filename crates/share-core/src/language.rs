//! Programming-language labels and icons for text entries.
//!
//! A text entry's language is resolved from its file extension first and
//! then from the tail of its MIME type (`text/x-python` → `x-python`,
//! `text/yaml` → `yaml`). Icons point at the devicon CDN.

use serde::Serialize;

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Display label and optional icon URL for a text entry's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageMeta {
    pub label: String,
    pub icon: Option<String>,
}

struct LanguageDef {
    label: &'static str,
    /// `(devicon name, variant)`.
    icon: Option<(&'static str, &'static str)>,
    aliases: &'static [&'static str],
}

// Later entries win when aliases overlap (`tsx` resolves to React).
#[rustfmt::skip]
const LANGUAGES: &[LanguageDef] = &[
    LanguageDef { label: "TypeScript", icon: Some(("typescript", "original")), aliases: &["ts", "tsx", "typescript"] },
    LanguageDef { label: "JavaScript", icon: Some(("javascript", "original")), aliases: &["js", "mjs", "cjs", "javascript"] },
    LanguageDef { label: "React", icon: Some(("react", "original")), aliases: &["jsx", "tsx"] },
    LanguageDef { label: "JSON", icon: Some(("json", "original")), aliases: &["json"] },
    LanguageDef { label: "Markdown", icon: Some(("markdown", "original")), aliases: &["md", "markdown"] },
    LanguageDef { label: "HTML", icon: Some(("html5", "original")), aliases: &["html", "htm"] },
    LanguageDef { label: "CSS", icon: Some(("css3", "original")), aliases: &["css"] },
    LanguageDef { label: "Sass", icon: Some(("sass", "original")), aliases: &["scss", "sass"] },
    LanguageDef { label: "Less", icon: Some(("less", "original")), aliases: &["less"] },
    LanguageDef { label: "Tailwind", icon: Some(("tailwindcss", "original")), aliases: &["tailwind", "tw"] },
    LanguageDef { label: "Python", icon: Some(("python", "original")), aliases: &["py", "python", "x-python"] },
    LanguageDef { label: "Ruby", icon: Some(("ruby", "original")), aliases: &["rb", "ruby"] },
    LanguageDef { label: "PHP", icon: Some(("php", "original")), aliases: &["php"] },
    LanguageDef { label: "Go", icon: Some(("go", "original")), aliases: &["go", "golang"] },
    LanguageDef { label: "Rust", icon: Some(("rust", "plain")), aliases: &["rs", "rust"] },
    LanguageDef { label: "Java", icon: Some(("java", "original")), aliases: &["java"] },
    LanguageDef { label: "Kotlin", icon: Some(("kotlin", "original")), aliases: &["kt", "kts", "kotlin"] },
    LanguageDef { label: "Swift", icon: Some(("swift", "original")), aliases: &["swift"] },
    LanguageDef { label: "C", icon: Some(("c", "original")), aliases: &["c"] },
    LanguageDef { label: "C++", icon: Some(("cplusplus", "original")), aliases: &["cc", "cpp", "cxx"] },
    LanguageDef { label: "C#", icon: Some(("csharp", "original")), aliases: &["cs", "csharp"] },
    LanguageDef { label: "Bash", icon: Some(("bash", "original")), aliases: &["sh", "bash", "zsh", "x-sh"] },
    LanguageDef { label: "YAML", icon: Some(("yaml", "original")), aliases: &["yaml", "yml"] },
    LanguageDef { label: "Docker", icon: Some(("docker", "original")), aliases: &["dockerfile", "docker"] },
    LanguageDef { label: "SQL", icon: Some(("mysql", "original")), aliases: &["sql", "mysql"] },
    LanguageDef { label: "Plain Text", icon: None, aliases: &["txt", "text", "plain", "plaintext"] },
];

fn devicon(name: &str, variant: &str) -> String {
    format!("{}/{}/{}-{}.svg", DEVICON_BASE, name, name, variant)
}

fn lookup(alias: &str) -> Option<&'static LanguageDef> {
    LANGUAGES
        .iter()
        .rev()
        .find(|def| def.aliases.iter().any(|a| *a == alias))
}

/// Resolve the language label and icon for a file name and MIME type.
pub fn language_meta(file_name: &str, mime_type: &str) -> LanguageMeta {
    let extension = crate::naming::extension(file_name);
    let mime_tail = mime_type
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    for candidate in [extension.as_str(), mime_tail.as_str()] {
        if candidate.is_empty() {
            continue;
        }
        if let Some(def) = lookup(candidate) {
            return LanguageMeta {
                label: def.label.to_string(),
                icon: def.icon.map(|(name, variant)| devicon(name, variant)),
            };
        }
    }

    LanguageMeta {
        label: fallback_label(&extension),
        icon: None,
    }
}

fn fallback_label(extension: &str) -> String {
    match extension.chars().count() {
        0 => "File".to_string(),
        1..=4 => extension.to_uppercase(),
        _ => extension.to_string(),
    }
}

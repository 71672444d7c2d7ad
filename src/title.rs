//! Document title derivation from the location path.
//!
//! The title is the last non-empty path segment, with a trailing `.html`
//! extension stripped and an `index.html` leaf resolved to its parent
//! segment. Paths are untrusted input (they can carry encoded or pasted
//! junk), so the candidate is scrubbed of angle brackets and control
//! characters before use. This never fails; the fallback title is `index`.

use std::sync::OnceLock;

use regex::Regex;

/// Fallback title for root, empty, or fully-scrubbed paths.
const FALLBACK_TITLE: &str = "index";

/// Angle brackets, C0 control characters and DEL.
fn scrub_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[<>\x00-\x1F\x7F]").expect("valid scrub pattern"))
}

/// Remove markup-significant and control characters from a title candidate.
fn sanitize_title(title: &str) -> String {
    scrub_pattern().replace_all(title, "").trim().to_string()
}

/// Derive the document title from a location path.
///
/// # Example
/// ```ignore
/// assert_eq!(derive_title("/a/b/notes.html"), "notes");
/// assert_eq!(derive_title("/"), "index");
/// ```
pub fn derive_title(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let candidate = match segments.last() {
        None => FALLBACK_TITLE.to_string(),
        Some(last) if last.eq_ignore_ascii_case("index.html") => {
            if segments.len() > 1 {
                segments[segments.len() - 2].to_string()
            } else {
                FALLBACK_TITLE.to_string()
            }
        }
        Some(last) if last.ends_with(".html") => last[..last.len() - 5].to_string(),
        Some(last) => last.to_string(),
    };

    let sanitized = sanitize_title(&candidate);
    if sanitized.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        sanitized
    }
}

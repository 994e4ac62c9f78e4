//! Photo URL resolution.
//!
//! Sheet cells holding photos come in three flavours: full URLs (often Google
//! Drive share links), bare Drive file ids, and paths to assets shipped with
//! the site. This module turns any of them into something an `<img>` can load.
//!
//! Drive ids are rewritten to the `lh3.googleusercontent.com` host, which
//! serves the image directly without the cookie redirects Drive itself uses.
//! The Drive `uc` endpoints are kept as fallbacks for the image block.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum length of a token accepted as a Drive file id.
pub const DRIVE_ID_MIN_LEN: usize = 25;

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid url regex"));

static DRIVE_ID_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([-A-Za-z0-9_]{25,})").expect("valid query regex"));

static DRIVE_ID_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([-A-Za-z0-9_]{25,})").expect("valid path regex"));

static BARE_DRIVE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-A-Za-z0-9_]{25,}").expect("valid token regex"));

/// Direct image host form for a Drive file id.
pub fn direct_image_url(file_id: &str) -> String {
    format!("https://lh3.googleusercontent.com/d/{file_id}=w1600")
}

/// Drive forced-download form for a Drive file id.
pub fn drive_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={file_id}")
}

/// Drive inline-view form for a Drive file id.
pub fn drive_view_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={file_id}")
}

/// Extracts a Drive file id carried by an `id=` query parameter or a `/d/`
/// path segment. The query parameter wins when both are present.
pub fn drive_file_id(value: &str) -> Option<&str> {
    DRIVE_ID_QUERY
        .captures(value)
        .or_else(|| DRIVE_ID_PATH.captures(value))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Normalizes a raw photo cell into the URL stored on a record.
///
/// - empty or blank input gives an empty string
/// - `http(s)` URLs pointing at a Drive file become the direct image form,
///   any other URL is kept as is
/// - a value containing a bare Drive id becomes the direct image form
/// - anything else is a site-relative asset path and gets a leading `/`
pub fn normalize_for_storage(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if HTTP_URL.is_match(trimmed) {
        return match drive_file_id(trimmed) {
            Some(file_id) => direct_image_url(file_id),
            None => trimmed.to_string(),
        };
    }

    if let Some(token) = BARE_DRIVE_ID.find(trimmed) {
        return direct_image_url(token.as_str());
    }

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Ordered list of URLs to try for one photo value.
///
/// Drive-backed values yield the direct image host, then the forced download
/// endpoint, then the inline view endpoint. Anything else yields the single
/// normalized value. Empty input yields an empty list.
pub fn resolve_candidates(raw: &str) -> Vec<String> {
    let normalized = normalize_for_storage(raw);
    if normalized.is_empty() {
        return Vec::new();
    }

    let variants = match drive_file_id(&normalized) {
        Some(file_id) => vec![
            direct_image_url(file_id),
            drive_download_url(file_id),
            drive_view_url(file_id),
        ],
        None => vec![normalized.clone()],
    };

    let mut candidates: Vec<String> = Vec::with_capacity(variants.len());
    for url in variants {
        if !candidates.contains(&url) {
            candidates.push(url);
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "ABCDEFGHIJKLMNOPQRSTUVWXY123";

    fn drive_variants(id: &str) -> Vec<String> {
        vec![
            format!("https://lh3.googleusercontent.com/d/{id}=w1600"),
            format!("https://drive.google.com/uc?export=download&id={id}"),
            format!("https://drive.google.com/uc?export=view&id={id}"),
        ]
    }

    #[test]
    fn empty_and_blank_values_resolve_to_nothing() {
        assert_eq!(normalize_for_storage(""), "");
        assert_eq!(normalize_for_storage("   "), "");
        assert!(resolve_candidates("").is_empty());
        assert!(resolve_candidates(" \t").is_empty());
    }

    #[test]
    fn drive_open_link_becomes_direct_image_host() {
        let raw = format!("https://drive.google.com/open?id={ID}");
        assert_eq!(normalize_for_storage(&raw), direct_image_url(ID));
    }

    #[test]
    fn drive_file_view_link_becomes_direct_image_host() {
        let raw = format!("  https://drive.google.com/file/d/{ID}/view?usp=sharing ");
        assert_eq!(normalize_for_storage(&raw), direct_image_url(ID));
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        let raw = format!("HTTPS://drive.google.com/uc?export=view&id={ID}");
        assert_eq!(normalize_for_storage(&raw), direct_image_url(ID));
    }

    #[test]
    fn plain_urls_pass_through() {
        let raw = "https://example.com/images/cat.png";
        assert_eq!(normalize_for_storage(raw), raw);
        assert_eq!(resolve_candidates(raw), vec![raw.to_string()]);
    }

    #[test]
    fn short_id_parameter_is_not_a_drive_id() {
        let raw = "https://example.com/photo?id=12345";
        assert_eq!(normalize_for_storage(raw), raw);
    }

    #[test]
    fn bare_token_is_treated_as_drive_id() {
        assert_eq!(normalize_for_storage(ID), direct_image_url(ID));
    }

    #[test]
    fn relative_paths_get_a_leading_slash() {
        assert_eq!(normalize_for_storage("images/a.jpg"), "/images/a.jpg");
        assert_eq!(normalize_for_storage("/images/a.jpg"), "/images/a.jpg");
        assert_eq!(
            normalize_for_storage("Untitled spreadsheet_Images/bfcd74b0.photo.154320.jpg"),
            "/Untitled spreadsheet_Images/bfcd74b0.photo.154320.jpg"
        );
    }

    #[test]
    fn drive_values_yield_three_candidates_in_order() {
        let expected = drive_variants(ID);
        assert_eq!(
            resolve_candidates(&format!("https://drive.google.com/open?id={ID}")),
            expected
        );
        assert_eq!(
            resolve_candidates(&format!("https://drive.google.com/file/d/{ID}/view")),
            expected
        );
        assert_eq!(resolve_candidates(ID), expected);
    }

    #[test]
    fn candidates_are_stable_for_already_normalized_values() {
        let stored = normalize_for_storage(ID);
        assert_eq!(resolve_candidates(&stored), drive_variants(ID));
    }

    #[test]
    fn non_drive_values_yield_one_candidate() {
        assert_eq!(resolve_candidates("pics/a.jpg"), vec!["/pics/a.jpg".to_string()]);
    }

    #[test]
    fn query_parameter_wins_over_path_segment() {
        let other = "ZYXWVUTSRQPONMLKJIHGFEDCBA987";
        let raw = format!("https://drive.google.com/d/{other}/x?id={ID}");
        assert_eq!(drive_file_id(&raw), Some(ID));
    }
}

//! Slug generation and validation.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum slug length, matching the `posts.slug` column.
pub const MAX_SLUG_LENGTH: usize = 250;

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap());
static SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Converts a title or tag label into a URL slug.
///
/// Lowercases ASCII letters, turns every run of other characters into a single
/// hyphen and trims hyphens at both ends. Non-ASCII characters are dropped, so
/// the result may be empty.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Rust & Axum  "), "rust-axum");
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_ascii_lowercase();
    let slug = SEPARATOR_REGEX.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');

    let mut slug = slug.to_string();
    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        slug = slug.trim_end_matches('-').to_string();
    }
    slug
}

/// Returns true if `slug` only contains letters, digits, hyphens and underscores.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LENGTH && SLUG_REGEX.is_match(slug)
}

//! Parsing of raw path segments.
//!
//! Segments are extracted as strings and parsed here so that non-numeric ids
//! and dates resolve to `404 Not Found` rather than a rejection.

use serde_json::json;

use crate::domain::entities::PostDateKey;
use crate::error::AppError;

/// Parses a post id segment.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if `raw` is not a positive integer.
pub fn parse_post_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::not_found("Post not found", json!({ "post_id": raw })))
}

/// Parses `(year, month, day, slug)` segments into a lookup key.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if a date segment is not a number.
pub fn parse_date_key(
    year: &str,
    month: &str,
    day: &str,
    slug: &str,
) -> Result<PostDateKey, AppError> {
    PostDateKey::parse(year, month, day, slug).ok_or_else(|| {
        AppError::not_found(
            "Post not found",
            json!({ "year": year, "month": month, "day": day, "slug": slug }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_id() {
        assert_eq!(parse_post_id("42").unwrap(), 42);
        assert!(matches!(parse_post_id("abc"), Err(AppError::NotFound { .. })));
        assert!(matches!(parse_post_id("0"), Err(AppError::NotFound { .. })));
        assert!(matches!(parse_post_id("-3"), Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_parse_date_key() {
        let key = parse_date_key("2025", "1", "02", "hello").unwrap();
        assert_eq!(key, PostDateKey::new(2025, 1, 2, "hello"));

        assert!(matches!(
            parse_date_key("2025", "jan", "02", "hello"),
            Err(AppError::NotFound { .. })
        ));
    }
}

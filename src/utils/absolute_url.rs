//! Absolute URL construction for links sent outside the site.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;
use url::Url;

/// Resolves the public base URL of the site for the current request.
///
/// Uses `configured` (from `SITE_URL`) when set. Otherwise the base is built
/// from the `Host` header (port included) and the `X-Forwarded-Proto` header,
/// defaulting to `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base is configured and the `Host`
/// header is missing or does not form a valid URL.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "blog.example.com:8080".parse().unwrap());
///
/// let base = request_base_url(&headers, None).unwrap();
/// assert_eq!(base.as_str(), "http://blog.example.com:8080/");
/// ```
pub fn request_base_url(headers: &HeaderMap, configured: Option<&Url>) -> Result<Url, AppError> {
    if let Some(base) = configured {
        return Ok(base.clone());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim())
        .filter(|v| *v == "http" || *v == "https")
        .unwrap_or("http");

    Url::parse(&format!("{scheme}://{host}/"))
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({ "host": host })))
}

/// Joins a site-relative path onto `base`, keeping any path prefix of `base`.
///
/// `https://example.com/blog` + `/2025/1/2/hello/` →
/// `https://example.com/blog/2025/1/2/hello/`
pub fn absolute_url(base: &Url, path: &str) -> String {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    match base.join(path.trim_start_matches('/')) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base.as_str().trim_end_matches('/'), path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_configured_base_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("ignored.test"));
        let configured = Url::parse("https://blog.example.com/").unwrap();

        let base = request_base_url(&headers, Some(&configured)).unwrap();

        assert_eq!(base.as_str(), "https://blog.example.com/");
    }

    #[test]
    fn test_base_from_host_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        let base = request_base_url(&headers, None).unwrap();

        assert_eq!(base.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_forwarded_proto_is_honoured() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("blog.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https, http"));

        let base = request_base_url(&headers, None).unwrap();

        assert_eq!(base.as_str(), "https://blog.example.com/");
    }

    #[test]
    fn test_missing_host_is_error() {
        let result = request_base_url(&HeaderMap::new(), None);
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_absolute_url_at_root() {
        let base = Url::parse("http://localhost:3000").unwrap();
        assert_eq!(
            absolute_url(&base, "/2025/3/4/hello/"),
            "http://localhost:3000/2025/3/4/hello/"
        );
    }

    #[test]
    fn test_absolute_url_keeps_prefix() {
        let base = Url::parse("https://example.com/blog").unwrap();
        assert_eq!(
            absolute_url(&base, "/2025/3/4/hello/"),
            "https://example.com/blog/2025/3/4/hello/"
        );
    }
}

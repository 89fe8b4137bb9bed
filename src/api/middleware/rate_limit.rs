//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiter layer keyed by peer IP.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for read-only pages.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> RateLimitLayer {
    build(2, 100)
}

/// Creates a stricter rate limiter for form submissions.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Applied to comment and share routes, which write to the database or send
/// mail.
///
/// # Example
///
/// ```rust,ignore
/// let forms = Router::new()
///     .route("/{id}/comment", post(comment_handler))
///     .layer(rate_limit::secure_layer());
/// ```
pub fn secure_layer() -> RateLimitLayer {
    build(1, 10)
}

fn build(per_second: u64, burst_size: u32) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

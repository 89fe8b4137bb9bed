//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod comment;
pub mod health;
pub mod posts;
pub mod share;

pub use comment::comment_handler;
pub use health::health_handler;
pub use posts::{post_detail_handler, post_list_handler};
pub use share::{share_form_handler, share_submit_handler};

use crate::error::AppError;

/// Fallback for POST-only routes.
pub async fn post_only_handler() -> AppError {
    AppError::method_not_allowed("POST")
}

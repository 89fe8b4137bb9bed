//! Shared application state injected into every handler.

use std::sync::Arc;

use url::Url;

use crate::application::services::{CommentService, PostService, ShareService};

/// Services and settings shared by the API and web handlers.
///
/// Cheap to clone: services are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
    pub comment_service: Arc<CommentService>,
    pub share_service: Arc<ShareService>,
    /// Configured public base URL; `None` derives it from request headers.
    pub site_url: Option<Url>,
}

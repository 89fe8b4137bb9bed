//! Public blog route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    comment_handler, post_detail_handler, post_list_by_tag_handler, post_list_handler,
    post_only_handler, share_form_handler, share_submit_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only pages.
///
/// # Endpoints
///
/// - `GET /`                             - Published posts (`?tag=`, `?page=`)
/// - `GET /tag/{slug}`                   - Published posts with a tag
/// - `GET /{id}/{month}/{day}/{slug}`    - Post detail, `{id}` being the year
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(post_list_handler))
        .route("/tag/{slug}", get(post_list_by_tag_handler))
        .route("/{id}/{month}/{day}/{slug}", get(post_detail_handler))
}

/// Form pages.
///
/// # Endpoints
///
/// - `POST     /{id}/comment` - Comment on a post (other methods: 405)
/// - `GET|POST /{id}/share`   - Recommend a post by e-mail
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/comment",
            post(comment_handler).fallback(post_only_handler),
        )
        .route(
            "/{id}/share",
            get(share_form_handler).post(share_submit_handler),
        )
}

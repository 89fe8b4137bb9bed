//! API route configuration.

use crate::api::handlers::{
    comment_handler, post_detail_handler, post_list_handler, post_only_handler,
    share_form_handler, share_submit_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only API routes.
///
/// # Endpoints
///
/// - `GET /posts`                           - Paginated published posts (`?tag=`, `?page=`)
/// - `GET /posts/{id}/{month}/{day}/{slug}` - Post detail, `{id}` being the year
///
/// The `{id}` segment is shared with [`form_routes`], where it is a post id;
/// parameters at the same position must have one name.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(post_list_handler))
        .route("/posts/{id}/{month}/{day}/{slug}", get(post_detail_handler))
}

/// Form submission routes.
///
/// # Endpoints
///
/// - `POST     /posts/{id}/comment` - Add a comment (other methods: 405)
/// - `GET|POST /posts/{id}/share`   - Share form / send recommendation
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/{id}/comment",
            post(comment_handler).fallback(post_only_handler),
        )
        .route(
            "/posts/{id}/share",
            get(share_form_handler).post(share_submit_handler),
        )
}

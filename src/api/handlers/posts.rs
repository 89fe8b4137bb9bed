//! Handlers for post listing and detail endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::posts::{PostDetailResponse, PostListQuery, PostListResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path_params::parse_date_key;

/// Returns one page of published posts.
///
/// # Endpoint
///
/// `GET /api/posts?tag={slug}&page={n}`
///
/// # Pagination
///
/// Three posts per page. A missing or non-integer `page` yields the first
/// page; an out-of-range page yields the last one.
///
/// # Errors
///
/// Returns 404 Not Found if `tag` does not name a tag.
pub async fn post_list_handler(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> Result<Json<PostListResponse>, AppError> {
    let ctx = state
        .post_service
        .list_published(query.tag.as_deref(), query.page.as_deref())
        .await?;

    Ok(Json(PostListResponse::from(&ctx)))
}

/// Returns a published post with its tags, active comments and similar posts.
///
/// # Endpoint
///
/// `GET /api/posts/{year}/{month}/{day}/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if no published post matches, or if the date
/// segments are not a valid date.
pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path((year, month, day, slug)): Path<(String, String, String, String)>,
) -> Result<Json<PostDetailResponse>, AppError> {
    let key = parse_date_key(&year, &month, &day, &slug)?;
    let ctx = state.post_service.get_published(&key).await?;

    Ok(Json(PostDetailResponse::from(&ctx)))
}

//! Post listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};

use crate::api::dto::posts::PostListQuery;
use crate::application::services::{PostDetailContext, PostListContext};
use crate::state::AppState;
use crate::utils::path_params::parse_date_key;
use crate::web::error::WebError;

/// Words shown per post on the listing page.
const EXCERPT_WORDS: usize = 30;

/// Template for the listing page.
///
/// Renders `templates/post/list.html` with:
/// - The active tag filter, if any
/// - One page of posts with their tags and excerpts
/// - Previous/next page links
#[derive(Template, WebTemplate)]
#[template(path = "post/list.html")]
pub struct PostListTemplate {
    pub ctx: PostListContext,
    /// Query string prefix of pagination links, e.g. `?tag=rust&page=`.
    pub page_query: String,
    pub excerpt_words: usize,
}

#[derive(Template, WebTemplate)]
#[template(path = "post/detail.html")]
pub struct PostDetailTemplate {
    pub ctx: PostDetailContext,
}

/// Renders the listing page.
///
/// # Endpoint
///
/// `GET /?tag={slug}&page={n}`
pub async fn post_list_handler(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> Result<PostListTemplate, WebError> {
    let ctx = state
        .post_service
        .list_published(query.tag.as_deref(), query.page.as_deref())
        .await?;

    let page_query = match ctx.tag {
        Some(ref tag) => format!("?tag={}&page=", tag.slug),
        None => "?page=".to_string(),
    };

    Ok(PostListTemplate {
        ctx,
        page_query,
        excerpt_words: EXCERPT_WORDS,
    })
}

/// Renders the listing page filtered by the tag in the path.
///
/// # Endpoint
///
/// `GET /tag/{slug}?page={n}`
pub async fn post_list_by_tag_handler(
    State(state): State<AppState>,
    Path(tag_slug): Path<String>,
    Query(query): Query<PostListQuery>,
) -> Result<PostListTemplate, WebError> {
    let ctx = state
        .post_service
        .list_published(Some(&tag_slug), query.page.as_deref())
        .await?;

    Ok(PostListTemplate {
        ctx,
        page_query: "?page=".to_string(),
        excerpt_words: EXCERPT_WORDS,
    })
}

/// Renders a published post with comments, similar posts and the comment form.
///
/// # Endpoint
///
/// `GET /{year}/{month}/{day}/{slug}`
pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path((year, month, day, slug)): Path<(String, String, String, String)>,
) -> Result<PostDetailTemplate, WebError> {
    let key = parse_date_key(&year, &month, &day, &slug)?;
    let ctx = state.post_service.get_published(&key).await?;

    Ok(PostDetailTemplate { ctx })
}

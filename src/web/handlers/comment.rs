//! Comment submission page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
};

use crate::application::forms::CommentForm;
use crate::application::services::CommentContext;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path_params::parse_post_id;
use crate::web::error::WebError;

/// Confirmation page, or the form again with field errors.
#[derive(Template, WebTemplate)]
#[template(path = "post/comment.html")]
pub struct CommentTemplate {
    pub ctx: CommentContext,
}

/// Handles the comment form posted from the detail page.
///
/// # Endpoint
///
/// `POST /{post_id}/comment`
pub async fn comment_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Result<CommentTemplate, WebError> {
    let post_id = parse_post_id(&post_id)?;
    let ctx = state.comment_service.submit(post_id, form).await?;

    Ok(CommentTemplate { ctx })
}

/// Fallback for POST-only pages.
pub async fn post_only_handler() -> WebError {
    WebError(AppError::method_not_allowed("POST"))
}

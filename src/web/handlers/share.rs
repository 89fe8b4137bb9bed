//! Share-by-email page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::application::forms::ShareForm;
use crate::application::services::ShareContext;
use crate::state::AppState;
use crate::utils::absolute_url::request_base_url;
use crate::utils::path_params::parse_post_id;
use crate::web::error::WebError;

#[derive(Template, WebTemplate)]
#[template(path = "post/share.html")]
pub struct ShareTemplate {
    pub ctx: ShareContext,
}

/// Renders an empty share form.
///
/// # Endpoint
///
/// `GET /{post_id}/share`
pub async fn share_form_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ShareTemplate, WebError> {
    let post_id = parse_post_id(&post_id)?;
    let ctx = state.share_service.prepare(post_id).await?;

    Ok(ShareTemplate { ctx })
}

/// Sends the recommendation, or re-renders the form with field errors.
///
/// # Endpoint
///
/// `POST /{post_id}/share`
pub async fn share_submit_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<ShareForm>,
) -> Result<ShareTemplate, WebError> {
    let post_id = parse_post_id(&post_id)?;
    let base_url = request_base_url(&headers, state.site_url.as_ref())?;
    let ctx = state.share_service.submit(post_id, form, &base_url).await?;

    Ok(ShareTemplate { ctx })
}

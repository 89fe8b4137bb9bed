//! Handlers for the share-by-email endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use axum_extra::extract::WithRejection;

use crate::api::dto::share::ShareResponse;
use crate::application::forms::ShareForm;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::absolute_url::request_base_url;
use crate::utils::path_params::parse_post_id;

/// Returns an empty share form for a published post.
///
/// # Endpoint
///
/// `GET /api/posts/{post_id}/share`
pub async fn share_form_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<ShareResponse>, AppError> {
    let post_id = parse_post_id(&post_id)?;
    let ctx = state.share_service.prepare(post_id).await?;

    Ok(Json(ShareResponse::from(&ctx)))
}

/// Validates a share form and e-mails the recommendation.
///
/// # Endpoint
///
/// `POST /api/posts/{post_id}/share`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@example.com",
///   "to": "bob@example.com",
///   "comments": "Worth reading"
/// }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: Mail sent (`sent: true`)
/// - **400 Bad Request**: Body is not valid JSON
/// - **404 Not Found**: Post missing or not published
/// - **422 Unprocessable Entity**: Field errors, no mail sent
/// - **502 Bad Gateway**: Mail transport failed
pub async fn share_submit_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    headers: HeaderMap,
    WithRejection(Json(form), _): WithRejection<Json<ShareForm>, AppError>,
) -> Result<(StatusCode, Json<ShareResponse>), AppError> {
    let post_id = parse_post_id(&post_id)?;
    let base_url = request_base_url(&headers, state.site_url.as_ref())?;
    let ctx = state.share_service.submit(post_id, form, &base_url).await?;

    let status = if ctx.sent {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((status, Json(ShareResponse::from(&ctx))))
}

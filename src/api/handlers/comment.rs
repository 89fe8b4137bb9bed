//! Handler for comment submission.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;

use crate::api::dto::comment::{CommentCreatedResponse, CommentRejectedResponse};
use crate::api::dto::posts::{CommentResponse, PostRef};
use crate::application::forms::CommentForm;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path_params::parse_post_id;

/// Adds a comment to a published post.
///
/// # Endpoint
///
/// `POST /api/posts/{post_id}/comment`
///
/// # Request Body
///
/// ```json
/// { "name": "Ann", "email": "ann@example.com", "body": "Nice post" }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: Comment stored
/// - **400 Bad Request**: Body is not valid JSON
/// - **404 Not Found**: Post missing or not published
/// - **405 Method Not Allowed**: Any method other than POST
/// - **422 Unprocessable Entity**: Field errors, nothing stored
pub async fn comment_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    WithRejection(Json(form), _): WithRejection<Json<CommentForm>, AppError>,
) -> Result<Response, AppError> {
    let post_id = parse_post_id(&post_id)?;
    let ctx = state.comment_service.submit(post_id, form).await?;

    let post = PostRef::from(&ctx.post);
    let response = match ctx.comment {
        Some(ref comment) => (
            StatusCode::CREATED,
            Json(CommentCreatedResponse {
                post,
                comment: CommentResponse::from(comment),
            }),
        )
            .into_response(),
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(CommentRejectedResponse {
                post,
                form: ctx.form,
                errors: ctx.errors,
            }),
        )
            .into_response(),
    };

    Ok(response)
}

//! DTOs for the comment endpoint.

use serde::Serialize;

use crate::api::dto::posts::{CommentResponse, PostRef};
use crate::application::forms::{CommentForm, FieldErrors};

/// Body of a `422 Unprocessable Entity` comment response.
#[derive(Debug, Serialize)]
pub struct CommentRejectedResponse {
    pub post: PostRef,
    pub form: CommentForm,
    pub errors: FieldErrors,
}

/// Body of a `201 Created` comment response.
#[derive(Debug, Serialize)]
pub struct CommentCreatedResponse {
    pub post: PostRef,
    pub comment: CommentResponse,
}

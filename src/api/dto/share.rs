//! DTOs for the share endpoint.

use serde::Serialize;

use crate::api::dto::posts::PostRef;
use crate::application::forms::{FieldErrors, ShareForm};
use crate::application::services::ShareContext;

/// Share workflow state.
///
/// ```json
/// {
///   "post": { "id": 1, "title": "Hello", "url": "/2025/1/2/hello/", "publish": "..." },
///   "form": { "name": "Ann", "email": "ann@example.com", "to": "bob@example.com", "comments": "" },
///   "errors": {},
///   "sent": true
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub post: PostRef,
    pub form: ShareForm,
    pub errors: FieldErrors,
    pub sent: bool,
}

impl From<&ShareContext> for ShareResponse {
    fn from(ctx: &ShareContext) -> Self {
        Self {
            post: PostRef::from(&ctx.post),
            form: ctx.form.clone(),
            errors: ctx.errors.clone(),
            sent: ctx.sent,
        }
    }
}

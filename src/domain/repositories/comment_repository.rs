//! Repository trait for comments.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for post comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new, active comment. Timestamps are set by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Lists active comments of a post, oldest first.
    async fn list_active(&self, post_id: i64) -> Result<Vec<Comment>, AppError>;
}

//! Repository trait for tags and post/tag membership.

use std::collections::HashMap;

use crate::domain::entities::Tag;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the tag index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Finds a tag by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError>;

    /// Tags of a single post, ordered by name.
    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Tag>, AppError>;

    /// Tags of several posts keyed by post id. Posts without tags are absent.
    async fn list_for_posts(&self, post_ids: &[i64]) -> Result<HashMap<i64, Vec<Tag>>, AppError>;

    /// Attaches a tag to a post, creating the tag if its slug is unknown.
    ///
    /// Attaching a tag twice is a no-op.
    async fn attach(&self, post_id: i64, name: &str, slug: &str) -> Result<Tag, AppError>;

    /// Lists all tags, ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;
}

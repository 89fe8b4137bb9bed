//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostDateKey, PostStatus, TagOverlap};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for blog posts.
///
/// Methods named `*_published` only ever see posts with
/// [`PostStatus::Published`]; the remaining methods are used by authoring tools
/// and see every post.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Creates a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds any post by id, regardless of status.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Finds a published post by id.
    async fn find_published_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Finds the published post addressed by `(year, month, day, slug)`.
    ///
    /// Returns `Ok(None)` when the key's date components are not a valid
    /// calendar date.
    async fn find_published_by_date(&self, key: &PostDateKey) -> Result<Option<Post>, AppError>;

    /// Lists published posts, newest first.
    ///
    /// # Arguments
    ///
    /// - `tag_id` - Optional tag filter
    /// - `offset` / `limit` - Row window
    async fn list_published(
        &self,
        tag_id: Option<i64>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, AppError>;

    /// Counts published posts, optionally filtered by tag.
    async fn count_published(&self, tag_id: Option<i64>) -> Result<i64, AppError>;

    /// Returns every other published post sharing at least one tag with
    /// `post_id`, together with the number of shared tags.
    ///
    /// Results are unranked; see [`crate::domain::similarity::rank_similar`].
    async fn published_with_shared_tags(&self, post_id: i64) -> Result<Vec<TagOverlap>, AppError>;

    /// Returns true if any post, whatever its status, uses `slug` on the
    /// publish date `date`.
    async fn slug_exists_on(&self, slug: &str, date: NaiveDate) -> Result<bool, AppError>;

    /// Changes the status of a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    async fn set_status(&self, id: i64, status: PostStatus) -> Result<Post, AppError>;

    /// Lists all posts (any status), newest first.
    async fn list_all(&self, limit: i64) -> Result<Vec<Post>, AppError>;
}

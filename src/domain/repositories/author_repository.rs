//! Repository trait for authors.

use crate::domain::entities::Author;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Creates an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    async fn create(&self, username: &str) -> Result<Author, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, AppError>;
}

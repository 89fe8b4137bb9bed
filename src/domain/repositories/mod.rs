//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so that services can run against any
//! storage backend.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Posts and published-only queries
//! - [`CommentRepository`] - Comments
//! - [`TagRepository`] - Tags and post/tag membership
//! - [`AuthorRepository`] - Authors
//!
//! # Testing
//!
//! Services are unit-tested against the `mockall` doubles. The HTTP tests in
//! `tests/` and `tests/repository_*.rs` run against PostgreSQL.

pub mod author_repository;
pub mod comment_repository;
pub mod post_repository;
pub mod tag_repository;

pub use author_repository::AuthorRepository;
pub use comment_repository::CommentRepository;
pub use post_repository::PostRepository;
pub use tag_repository::TagRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;

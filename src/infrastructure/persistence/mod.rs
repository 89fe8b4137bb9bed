//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgPostRepository`] - Posts, published-only scoping and tag overlap
//! - [`PgCommentRepository`] - Comments
//! - [`PgTagRepository`] - Tags and post/tag membership
//! - [`PgAuthorRepository`] - Authors

pub mod pg_author_repository;
pub mod pg_comment_repository;
pub mod pg_post_repository;
pub mod pg_tag_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_tag_repository::PgTagRepository;

//! Core domain entities representing the blog's data model.
//!
//! Entities are plain data structures; query scoping and workflows live in the
//! repositories and services.
//!
//! # Entity Types
//!
//! - [`Post`] - An article with a publication status
//! - [`Comment`] - A reader comment on a post
//! - [`Tag`] - A label shared between posts
//! - [`Author`] - The owner of posts
//!
//! Creation inputs use separate `New*` structs (`NewPost`, `NewComment`).

pub mod author;
pub mod comment;
pub mod post;
pub mod tag;

pub use author::Author;
pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post, PostDateKey, PostStatus, day_bounds};
pub use tag::{Tag, TagOverlap};

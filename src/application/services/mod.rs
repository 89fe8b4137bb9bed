//! Business logic services for the application layer.

pub mod authoring_service;
pub mod comment_service;
pub mod post_service;
pub mod share_service;

pub use authoring_service::{AuthoringService, PostDraft};
pub use comment_service::{CommentContext, CommentService};
pub use post_service::{POSTS_PER_PAGE, PostDetailContext, PostListContext, PostService, PostSummary};
pub use share_service::{ShareContext, ShareService};

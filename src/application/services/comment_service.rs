//! Comment submission workflow.

use std::sync::Arc;

use crate::application::forms::{CommentForm, FieldErrors};
use crate::application::services::post_service::find_published_post;
use crate::domain::entities::{Comment, NewComment, Post};
use crate::domain::repositories::{CommentRepository, PostRepository};
use crate::error::AppError;

/// Result of a comment submission.
///
/// When validation fails `comment` is `None` and `errors` lists the problems;
/// the page is re-rendered with the submitted `form`.
#[derive(Debug, Clone)]
pub struct CommentContext {
    pub post: Post,
    pub form: CommentForm,
    pub errors: FieldErrors,
    pub comment: Option<Comment>,
}

impl CommentContext {
    pub fn is_created(&self) -> bool {
        self.comment.is_some()
    }
}

/// Validates and stores reader comments on published posts.
pub struct CommentService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// Submits a comment for the post `post_id`.
    ///
    /// Invalid input is not an error: the returned context carries the field
    /// errors and nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `post_id` is not a published post.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn submit(&self, post_id: i64, form: CommentForm) -> Result<CommentContext, AppError> {
        let post = find_published_post(self.posts.as_ref(), post_id).await?;

        let fields = match form.clean() {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(post_id, fields = ?errors, "Comment rejected by validation");
                return Ok(CommentContext {
                    post,
                    form,
                    errors,
                    comment: None,
                });
            }
        };

        let comment = self
            .comments
            .create(NewComment {
                post_id: post.id,
                name: fields.name,
                email: fields.email,
                body: fields.body,
            })
            .await?;

        tracing::info!(post_id, comment_id = comment.id, "Comment created");
        metrics::counter!("blog_comments_created_total").increment(1);

        Ok(CommentContext {
            post,
            form,
            errors: FieldErrors::default(),
            comment: Some(comment),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::post_service::tests::create_test_post;
    use crate::domain::entities::PostStatus;
    use crate::domain::repositories::{MockCommentRepository, MockPostRepository};
    use chrono::Utc;

    fn form(name: &str, email: &str, body: &str) -> CommentForm {
        CommentForm {
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    fn published_posts() -> MockPostRepository {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_published_by_id()
            .returning(|id| Ok(Some(create_test_post(id, PostStatus::Published))));
        posts
    }

    #[tokio::test]
    async fn test_submit_valid_comment_creates_it() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_create()
            .withf(|c| c.post_id == 3 && c.name == "Ann" && c.body == "Great read")
            .times(1)
            .returning(|c| {
                Ok(Comment {
                    id: 11,
                    post_id: c.post_id,
                    name: c.name,
                    email: c.email,
                    body: c.body,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                    active: true,
                })
            });

        let service = CommentService::new(Arc::new(published_posts()), Arc::new(comments));
        let ctx = service
            .submit(3, form(" Ann ", "ann@example.com", "Great read"))
            .await
            .unwrap();

        assert!(ctx.is_created());
        assert!(ctx.errors.is_empty());
        let comment = ctx.comment.unwrap();
        assert_eq!(comment.id, 11);
        assert!(comment.active);
    }

    #[tokio::test]
    async fn test_submit_empty_name_stores_nothing() {
        let mut comments = MockCommentRepository::new();
        comments.expect_create().times(0);

        let service = CommentService::new(Arc::new(published_posts()), Arc::new(comments));
        let ctx = service
            .submit(3, form("", "ann@example.com", "Great read"))
            .await
            .unwrap();

        assert!(!ctx.is_created());
        assert!(ctx.errors.has("name"));
        assert_eq!(ctx.form.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_submit_to_unpublished_post_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_published_by_id().returning(|_| Ok(None));
        let mut comments = MockCommentRepository::new();
        comments.expect_create().times(0);

        let service = CommentService::new(Arc::new(posts), Arc::new(comments));
        let result = service
            .submit(8, form("Ann", "ann@example.com", "Great read"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}

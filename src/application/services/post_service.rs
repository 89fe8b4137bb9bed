//! Published-post queries: listing, detail and similar posts.

use std::sync::Arc;

use crate::application::forms::CommentForm;
use crate::domain::entities::{Comment, Post, PostDateKey, Tag};
use crate::domain::pagination::{Page, Paginator};
use crate::domain::repositories::{CommentRepository, PostRepository, TagRepository};
use crate::domain::similarity::{SIMILAR_POSTS_LIMIT, rank_similar};
use crate::error::AppError;
use serde_json::json;

/// Number of posts per listing page.
pub const POSTS_PER_PAGE: u32 = 3;

/// A post with the tags it carries.
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub post: Post,
    pub tags: Vec<Tag>,
}

/// Context of the listing page.
#[derive(Debug, Clone)]
pub struct PostListContext {
    pub posts: Page<PostSummary>,
    /// The tag the listing is filtered by, if any.
    pub tag: Option<Tag>,
}

/// Context of the detail page.
#[derive(Debug, Clone)]
pub struct PostDetailContext {
    pub post: Post,
    pub tags: Vec<Tag>,
    pub comments: Vec<Comment>,
    pub similar_posts: Vec<Post>,
    pub form: CommentForm,
}

/// Read-only queries over published posts.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        tags: Arc<dyn TagRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            posts,
            tags,
            comments,
        }
    }

    /// Returns one page of published posts, newest first.
    ///
    /// # Arguments
    ///
    /// - `tag_slug` - Optional tag filter
    /// - `raw_page` - Raw `page` query value; see [`Paginator::resolve`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `tag_slug` does not name a tag.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_published(
        &self,
        tag_slug: Option<&str>,
        raw_page: Option<&str>,
    ) -> Result<PostListContext, AppError> {
        let tag = match tag_slug.filter(|s| !s.is_empty()) {
            Some(slug) => Some(
                self.tags
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| AppError::not_found("Tag not found", json!({ "tag": slug })))?,
            ),
            None => None,
        };
        let tag_id = tag.as_ref().map(|t| t.id);

        let total = self.posts.count_published(tag_id).await?;
        let paginator = Paginator::new(POSTS_PER_PAGE, u64::try_from(total).unwrap_or(0));
        let number = paginator.resolve(raw_page);

        let posts = self
            .posts
            .list_published(tag_id, paginator.offset(number), paginator.limit())
            .await?;

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        let mut tags_by_post = self.tags.list_for_posts(&ids).await?;

        let items = posts
            .into_iter()
            .map(|post| PostSummary {
                tags: tags_by_post.remove(&post.id).unwrap_or_default(),
                post,
            })
            .collect();

        Ok(PostListContext {
            posts: paginator.page(number, items),
            tag,
        })
    }

    /// Loads the detail page of a published post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no published post matches the key,
    /// including keys whose date is not a calendar date.
    pub async fn get_published(&self, key: &PostDateKey) -> Result<PostDetailContext, AppError> {
        let post = self
            .posts
            .find_published_by_date(key)
            .await?
            .ok_or_else(|| post_not_found_by_key(key))?;

        let tags = self.tags.list_for_post(post.id).await?;
        let comments = self.comments.list_active(post.id).await?;
        let similar_posts = self.similar_posts(&post).await?;

        Ok(PostDetailContext {
            post,
            tags,
            comments,
            similar_posts,
            form: CommentForm::default(),
        })
    }

    /// Up to four published posts sharing tags with `post`.
    ///
    /// Ordered by shared-tag count, then publish time, both descending.
    pub async fn similar_posts(&self, post: &Post) -> Result<Vec<Post>, AppError> {
        let candidates = self.posts.published_with_shared_tags(post.id).await?;
        Ok(rank_similar(candidates, post.id, SIMILAR_POSTS_LIMIT))
    }

    /// Total number of published posts. Used by the health check.
    pub async fn published_count(&self) -> Result<i64, AppError> {
        self.posts.count_published(None).await
    }
}

/// Looks up a published post by id, failing with `NotFound`.
pub(crate) async fn find_published_post(
    posts: &dyn PostRepository,
    post_id: i64,
) -> Result<Post, AppError> {
    posts
        .find_published_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found", json!({ "post_id": post_id })))
}

fn post_not_found_by_key(key: &PostDateKey) -> AppError {
    AppError::not_found(
        "Post not found",
        json!({
            "year": key.year,
            "month": key.month,
            "day": key.day,
            "slug": key.slug,
        }),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::entities::{PostStatus, TagOverlap};
    use crate::domain::repositories::{
        MockCommentRepository, MockPostRepository, MockTagRepository,
    };
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashMap;

    pub(crate) fn create_test_post(id: i64, status: PostStatus) -> Post {
        let publish = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap() + Duration::days(id);
        Post {
            id,
            title: format!("Post {id}"),
            slug: format!("post-{id}"),
            author_id: 1,
            author: "admin".to_string(),
            body: "Body".to_string(),
            publish,
            created_at: publish,
            updated_at: publish,
            status,
        }
    }

    fn create_test_tag(id: i64, slug: &str) -> Tag {
        Tag {
            id,
            name: slug.to_string(),
            slug: slug.to_string(),
        }
    }

    fn service(
        posts: MockPostRepository,
        tags: MockTagRepository,
        comments: MockCommentRepository,
    ) -> PostService {
        PostService::new(Arc::new(posts), Arc::new(tags), Arc::new(comments))
    }

    #[tokio::test]
    async fn test_list_published_first_page() {
        let mut posts = MockPostRepository::new();
        let mut tags = MockTagRepository::new();

        posts
            .expect_count_published()
            .withf(|tag_id| tag_id.is_none())
            .times(1)
            .returning(|_| Ok(7));
        posts
            .expect_list_published()
            .withf(|tag_id, offset, limit| tag_id.is_none() && *offset == 0 && *limit == 3)
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    create_test_post(7, PostStatus::Published),
                    create_test_post(6, PostStatus::Published),
                    create_test_post(5, PostStatus::Published),
                ])
            });
        tags.expect_list_for_posts().times(1).returning(|ids| {
            assert_eq!(ids, [7, 6, 5]);
            Ok(HashMap::from([(6, vec![create_test_tag(1, "rust")])]))
        });

        let ctx = service(posts, tags, MockCommentRepository::new())
            .list_published(None, None)
            .await
            .unwrap();

        assert!(ctx.tag.is_none());
        assert_eq!(ctx.posts.number, 1);
        assert_eq!(ctx.posts.num_pages, 3);
        assert_eq!(ctx.posts.items.len(), 3);
        assert!(ctx.posts.items[0].tags.is_empty());
        assert_eq!(ctx.posts.items[1].tags[0].slug, "rust");
    }

    #[tokio::test]
    async fn test_list_published_clamps_page_to_last() {
        let mut posts = MockPostRepository::new();
        let mut tags = MockTagRepository::new();

        posts.expect_count_published().returning(|_| Ok(7));
        posts
            .expect_list_published()
            .withf(|_, offset, limit| *offset == 6 && *limit == 3)
            .times(1)
            .returning(|_, _, _| Ok(vec![create_test_post(1, PostStatus::Published)]));
        tags.expect_list_for_posts().returning(|_| Ok(HashMap::new()));

        let ctx = service(posts, tags, MockCommentRepository::new())
            .list_published(None, Some("42"))
            .await
            .unwrap();

        assert_eq!(ctx.posts.number, 3);
        assert_eq!(ctx.posts.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_published_non_integer_page_is_first() {
        let mut posts = MockPostRepository::new();
        let mut tags = MockTagRepository::new();

        posts.expect_count_published().returning(|_| Ok(7));
        posts
            .expect_list_published()
            .withf(|_, offset, _| *offset == 0)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));
        tags.expect_list_for_posts().returning(|_| Ok(HashMap::new()));

        let ctx = service(posts, tags, MockCommentRepository::new())
            .list_published(None, Some("two"))
            .await
            .unwrap();

        assert_eq!(ctx.posts.number, 1);
    }

    #[tokio::test]
    async fn test_list_published_filters_by_tag() {
        let mut posts = MockPostRepository::new();
        let mut tags = MockTagRepository::new();

        tags.expect_find_by_slug()
            .withf(|slug| slug == "rust")
            .times(1)
            .returning(|_| Ok(Some(create_test_tag(9, "rust"))));
        posts
            .expect_count_published()
            .withf(|tag_id| *tag_id == Some(9))
            .returning(|_| Ok(1));
        posts
            .expect_list_published()
            .withf(|tag_id, _, _| *tag_id == Some(9))
            .returning(|_, _, _| Ok(vec![create_test_post(3, PostStatus::Published)]));
        tags.expect_list_for_posts()
            .returning(|_| Ok(HashMap::from([(3, vec![create_test_tag(9, "rust")])])));

        let ctx = service(posts, tags, MockCommentRepository::new())
            .list_published(Some("rust"), None)
            .await
            .unwrap();

        assert_eq!(ctx.tag.unwrap().slug, "rust");
        assert_eq!(ctx.posts.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_published_unknown_tag_is_not_found() {
        let mut posts = MockPostRepository::new();
        let mut tags = MockTagRepository::new();

        tags.expect_find_by_slug().returning(|_| Ok(None));
        posts.expect_count_published().times(0);
        posts.expect_list_published().times(0);

        let result = service(posts, tags, MockCommentRepository::new())
            .list_published(Some("missing"), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_published_builds_detail_context() {
        let mut posts = MockPostRepository::new();
        let mut tags = MockTagRepository::new();
        let mut comments = MockCommentRepository::new();

        let source = create_test_post(1, PostStatus::Published);
        let key = source.date_key();
        posts
            .expect_find_published_by_date()
            .withf(move |k| k.slug == "post-1")
            .returning(move |_| Ok(Some(source.clone())));
        tags.expect_list_for_post().returning(|_| Ok(vec![create_test_tag(1, "rust")]));
        comments.expect_list_active().returning(|post_id| {
            Ok(vec![Comment {
                id: 1,
                post_id,
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                body: "Nice".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
                active: true,
            }])
        });
        posts
            .expect_published_with_shared_tags()
            .withf(|post_id| *post_id == 1)
            .returning(|_| {
                Ok(vec![
                    TagOverlap {
                        post: create_test_post(2, PostStatus::Published),
                        shared_tags: 1,
                    },
                    TagOverlap {
                        post: create_test_post(1, PostStatus::Published),
                        shared_tags: 1,
                    },
                ])
            });

        let ctx = service(posts, tags, comments)
            .get_published(&key)
            .await
            .unwrap();

        assert_eq!(ctx.post.id, 1);
        assert_eq!(ctx.tags.len(), 1);
        assert_eq!(ctx.comments.len(), 1);
        assert_eq!(ctx.similar_posts.len(), 1);
        assert_eq!(ctx.similar_posts[0].id, 2);
        assert_eq!(ctx.form, CommentForm::default());
    }

    #[tokio::test]
    async fn test_get_published_missing_post_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_find_published_by_date()
            .returning(|_| Ok(None));

        let result = service(posts, MockTagRepository::new(), MockCommentRepository::new())
            .get_published(&PostDateKey::new(2025, 1, 2, "draft-post"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}

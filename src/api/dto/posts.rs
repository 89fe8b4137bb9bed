//! DTOs for post listing and detail endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::application::services::{PostDetailContext, PostListContext, PostSummary};
use crate::domain::entities::{Comment, Post, Tag};
use crate::domain::pagination::Page;

/// Query parameters of the listing endpoints.
///
/// An empty `tag` deserializes as "no filter". `page` is kept raw so that a
/// non-integer value falls back to the first page.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PostListQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub tag: Option<String>,

    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub name: String,
    pub slug: String,
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        }
    }
}

/// Short reference to a post, used for similar posts and share context.
#[derive(Debug, Serialize)]
pub struct PostRef {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub publish: DateTime<Utc>,
}

impl From<&Post> for PostRef {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            url: post.absolute_path(),
            publish: post.publish,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub body: String,
    pub url: String,
    pub publish: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: String,
    pub tags: Vec<TagResponse>,
}

impl PostResponse {
    pub fn new(post: &Post, tags: &[Tag]) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            author: post.author.clone(),
            body: post.body.clone(),
            url: post.absolute_path(),
            publish: post.publish,
            created_at: post.created_at,
            updated_at: post.updated_at,
            status: post.status.label().to_string(),
            tags: tags.iter().map(TagResponse::from).collect(),
        }
    }
}

impl From<&PostSummary> for PostResponse {
    fn from(summary: &PostSummary) -> Self {
        Self::new(&summary.post, &summary.tags)
    }
}

/// Pagination metadata of a listing page.
#[derive(Debug, Serialize)]
pub struct PageInfo {
    pub number: u32,
    pub num_pages: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub has_previous: bool,
    pub has_next: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
}

impl<T> From<&Page<T>> for PageInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            number: page.number,
            num_pages: page.num_pages,
            per_page: page.per_page,
            total_items: page.total_items,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            previous_page: page.has_previous().then(|| page.previous_page_number()),
            next_page: page.has_next().then(|| page.next_page_number()),
        }
    }
}

/// Response of `GET /api/posts`.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagResponse>,
    pub page: PageInfo,
    pub posts: Vec<PostResponse>,
}

impl From<&PostListContext> for PostListResponse {
    fn from(ctx: &PostListContext) -> Self {
        Self {
            tag: ctx.tag.as_ref().map(TagResponse::from),
            page: PageInfo::from(&ctx.posts),
            posts: ctx.posts.items.iter().map(PostResponse::from).collect(),
        }
    }
}

/// Public view of a comment. The author's e-mail is never exposed.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            name: comment.name.clone(),
            body: comment.body.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Response of `GET /api/posts/{year}/{month}/{day}/{slug}`.
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub similar_posts: Vec<PostRef>,
}

impl From<&PostDetailContext> for PostDetailResponse {
    fn from(ctx: &PostDetailContext) -> Self {
        Self {
            post: PostResponse::new(&ctx.post, &ctx.tags),
            comments: ctx.comments.iter().map(CommentResponse::from).collect(),
            similar_posts: ctx.similar_posts.iter().map(PostRef::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn query(uri: &str) -> PostListQuery {
        let uri: Uri = uri.parse().unwrap();
        Query::<PostListQuery>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_empty_tag_is_no_filter() {
        let q = query("http://blog.test/?tag=&page=2");
        assert!(q.tag.is_none());
        assert_eq!(q.page.as_deref(), Some("2"));
    }

    #[test]
    fn test_page_kept_raw() {
        let q = query("http://blog.test/?tag=rust&page=abc");
        assert_eq!(q.tag.as_deref(), Some("rust"));
        assert_eq!(q.page.as_deref(), Some("abc"));

        let q = query("http://blog.test/");
        assert!(q.tag.is_none());
        assert!(q.page.is_none());
    }
}

//! Post authoring: authors, drafts, publication and tagging.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Author, NewPost, Post, PostStatus, Tag};
use crate::domain::repositories::{AuthorRepository, PostRepository, TagRepository};
use crate::error::AppError;
use crate::utils::slug::{is_valid_slug, slugify};

/// Maximum title length, matching the `posts.title` column.
const MAX_TITLE_LENGTH: usize = 250;

/// Input for [`AuthoringService::create_post`].
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    /// Explicit slug; derived from the title when `None`.
    pub slug: Option<String>,
    pub author: String,
    pub body: String,
    /// Publish timestamp; defaults to now.
    pub publish: Option<DateTime<Utc>>,
    pub status: PostStatus,
}

/// Service used by the admin CLI to manage content.
pub struct AuthoringService {
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl AuthoringService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        tags: Arc<dyn TagRepository>,
        authors: Arc<dyn AuthorRepository>,
    ) -> Self {
        Self {
            posts,
            tags,
            authors,
        }
    }

    /// Registers an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty username and
    /// [`AppError::Conflict`] if the username is taken.
    pub async fn create_author(&self, username: &str) -> Result<Author, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::bad_request("Username must not be empty", json!({})));
        }

        if self.authors.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "Author already exists",
                json!({ "username": username }),
            ));
        }

        self.authors.create(username).await
    }

    /// Creates a post.
    ///
    /// # Validation
    ///
    /// - Title: 1-250 characters
    /// - Slug: letters, digits, hyphens and underscores
    /// - Slug must be unused on the publish date
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid input,
    /// [`AppError::NotFound`] for an unknown author and
    /// [`AppError::Conflict`] if the slug is taken on that date.
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, AppError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::bad_request(
                "Title must be 1-250 characters",
                json!({ "provided_length": title.chars().count() }),
            ));
        }

        let slug = match draft.slug {
            Some(slug) => slug.trim().to_string(),
            None => slugify(&title),
        };
        if !is_valid_slug(&slug) {
            return Err(AppError::bad_request(
                "Slug can only contain letters, digits, hyphens and underscores",
                json!({ "slug": slug }),
            ));
        }

        let author = self
            .authors
            .find_by_username(&draft.author)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Author not found", json!({ "username": draft.author }))
            })?;

        let publish = draft.publish.unwrap_or_else(Utc::now);
        let publish_date = publish.date_naive();
        if self.posts.slug_exists_on(&slug, publish_date).await? {
            return Err(AppError::conflict(
                "Slug already used on this publish date",
                json!({ "slug": slug, "date": publish_date.to_string() }),
            ));
        }

        let post = self
            .posts
            .create(NewPost {
                title,
                slug,
                author_id: author.id,
                body: draft.body,
                publish,
                status: draft.status,
            })
            .await?;

        tracing::info!(post_id = post.id, slug = %post.slug, "Post created");
        Ok(post)
    }

    /// Publishes a draft. Publishing an already published post is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn publish(&self, post_id: i64) -> Result<Post, AppError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "post_id": post_id })))?;

        if post.is_published() {
            return Ok(post);
        }

        self.posts.set_status(post_id, PostStatus::Published).await
    }

    /// Attaches tags (by label) to a post, creating unknown tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist and
    /// [`AppError::Validation`] if a label has no usable slug.
    pub async fn tag_post(&self, post_id: i64, labels: &[String]) -> Result<Vec<Tag>, AppError> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(AppError::not_found(
                "Post not found",
                json!({ "post_id": post_id }),
            ));
        }

        let mut attached = Vec::with_capacity(labels.len());
        for label in labels {
            let name = label.trim();
            let slug = slugify(name);
            if slug.is_empty() {
                return Err(AppError::bad_request(
                    "Tag label must contain letters or digits",
                    json!({ "tag": label }),
                ));
            }
            attached.push(self.tags.attach(post_id, name, &slug).await?);
        }

        Ok(attached)
    }

    /// Lists posts of any status, newest first.
    pub async fn list_posts(&self, limit: i64) -> Result<Vec<Post>, AppError> {
        self.posts.list_all(limit).await
    }

    /// Lists all tags.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.tags.list().await
    }
}

//! PostgreSQL implementation of post repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostDateKey, PostStatus, TagOverlap, day_bounds};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// Columns selected for every post query; `p` is `posts`, `a` is `authors`.
const POST_COLUMNS: &str = "p.id, p.title, p.slug, p.author_id, a.username AS author, \
     p.body, p.publish, p.created_at, p.updated_at, p.status";

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    author_id: i64,
    author: String,
    body: String,
    publish: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    status: String,
}

#[derive(Debug, FromRow)]
struct OverlapRow {
    #[sqlx(flatten)]
    post: PostRow,
    shared_tags: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = AppError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let status = PostStatus::from_code(&row.status).ok_or_else(|| {
            AppError::internal(
                "Unknown post status in database",
                json!({ "post_id": row.id, "status": row.status }),
            )
        })?;

        Ok(Post {
            id: row.id,
            title: row.title,
            slug: row.slug,
            author_id: row.author_id,
            author: row.author,
            body: row.body,
            publish: row.publish,
            created_at: row.created_at,
            updated_at: row.updated_at,
            status,
        })
    }
}

fn into_posts(rows: Vec<PostRow>) -> Result<Vec<Post>, AppError> {
    rows.into_iter().map(Post::try_from).collect()
}

/// PostgreSQL repository for blog posts.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let sql = format!(
            r#"
            WITH p AS (
                INSERT INTO posts (title, slug, author_id, body, publish, status)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT {POST_COLUMNS}
            FROM p
            JOIN authors a ON a.id = p.author_id
            "#
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(&new_post.title)
            .bind(&new_post.slug)
            .bind(new_post.author_id)
            .bind(&new_post.body)
            .bind(new_post.publish)
            .bind(new_post.status.as_code())
            .fetch_one(self.pool.as_ref())
            .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN authors a ON a.id = p.author_id WHERE p.id = $1"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Post::try_from).transpose()
    }

    async fn find_published_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.id = $1 AND p.status = 'PB'
            "#
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Post::try_from).transpose()
    }

    async fn find_published_by_date(&self, key: &PostDateKey) -> Result<Option<Post>, AppError> {
        let Some((start, end)) = key.day_bounds() else {
            return Ok(None);
        };

        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.slug = $1
              AND p.status = 'PB'
              AND p.publish >= $2 AND p.publish < $3
            ORDER BY p.id
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(&key.slug)
            .bind(start)
            .bind(end)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Post::try_from).transpose()
    }

    async fn list_published(
        &self,
        tag_id: Option<i64>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.status = 'PB'
              AND ($1::bigint IS NULL OR EXISTS (
                  SELECT 1 FROM post_tags pt WHERE pt.post_id = p.id AND pt.tag_id = $1
              ))
            ORDER BY p.publish DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(tag_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_posts(rows)
    }

    async fn count_published(&self, tag_id: Option<i64>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM posts p
            WHERE p.status = 'PB'
              AND ($1::bigint IS NULL OR EXISTS (
                  SELECT 1 FROM post_tags pt WHERE pt.post_id = p.id AND pt.tag_id = $1
              ))
            "#,
        )
        .bind(tag_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn published_with_shared_tags(&self, post_id: i64) -> Result<Vec<TagOverlap>, AppError> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}, shared.shared_tags
            FROM (
                SELECT other.post_id, COUNT(*) AS shared_tags
                FROM post_tags own
                JOIN post_tags other ON other.tag_id = own.tag_id
                WHERE own.post_id = $1 AND other.post_id <> $1
                GROUP BY other.post_id
            ) shared
            JOIN posts p ON p.id = shared.post_id
            JOIN authors a ON a.id = p.author_id
            WHERE p.status = 'PB'
            ORDER BY p.id
            "#
        );

        let rows = sqlx::query_as::<_, OverlapRow>(&sql)
            .bind(post_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter()
            .map(|r| {
                Ok(TagOverlap {
                    post: r.post.try_into()?,
                    shared_tags: r.shared_tags,
                })
            })
            .collect()
    }

    async fn slug_exists_on(&self, slug: &str, date: NaiveDate) -> Result<bool, AppError> {
        let Some((start, end)) = day_bounds(date) else {
            return Ok(false);
        };

        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM posts
                WHERE slug = $1 AND publish >= $2 AND publish < $3
            )
            "#,
        )
        .bind(slug)
        .bind(start)
        .bind(end)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn set_status(&self, id: i64, status: PostStatus) -> Result<Post, AppError> {
        let sql = format!(
            r#"
            WITH p AS (
                UPDATE posts SET status = $2 WHERE id = $1
                RETURNING *
            )
            SELECT {POST_COLUMNS}
            FROM p
            JOIN authors a ON a.id = p.author_id
            "#
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .bind(status.as_code())
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "post_id": id })))?;

        row.try_into()
    }

    async fn list_all(&self, limit: i64) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            ORDER BY p.publish DESC, p.id DESC
            LIMIT $1
            "#
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_posts(rows)
    }
}

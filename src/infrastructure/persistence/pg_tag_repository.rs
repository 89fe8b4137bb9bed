//! PostgreSQL implementation of tag repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    #[sqlx(flatten)]
    tag: TagRow,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: row.id,
            name: row.name,
            slug: row.slug,
        }
    }
}

/// PostgreSQL repository for tags and the `post_tags` join table.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name, slug FROM tags WHERE slug = $1")
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Tag::from))
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT t.id, t.name, t.slug
            FROM tags t
            JOIN post_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn list_for_posts(&self, post_ids: &[i64]) -> Result<HashMap<i64, Vec<Tag>>, AppError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagRow>(
            r#"
            SELECT pt.post_id, t.id, t.name, t.slug
            FROM post_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.post_id = ANY($1)
            ORDER BY pt.post_id, t.name
            "#,
        )
        .bind(post_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            by_post.entry(row.post_id).or_default().push(row.tag.into());
        }

        Ok(by_post)
    }

    async fn attach(&self, post_id: i64, name: &str, slug: &str) -> Result<Tag, AppError> {
        let mut tx = self.pool.begin().await?;

        let tag = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (name, slug)
            VALUES ($1, $2)
            ON CONFLICT (slug) DO UPDATE SET slug = EXCLUDED.slug
            RETURNING id, name, slug
            "#,
        )
        .bind(name)
        .bind(slug)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO post_tags (post_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(tag.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(tag.into())
    }

    async fn list(&self) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name, slug FROM tags ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }
}

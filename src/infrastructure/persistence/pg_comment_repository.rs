//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    name: String,
    email: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    active: bool,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            post_id: row.post_id,
            name: row.name,
            email: row.email,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
            active: row.active,
        }
    }
}

pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (post_id, name, email, body)
            VALUES ($1, $2, $3, $4)
            RETURNING id, post_id, name, email, body, created_at, updated_at, active
            "#,
        )
        .bind(new_comment.post_id)
        .bind(&new_comment.name)
        .bind(&new_comment.email)
        .bind(&new_comment.body)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_active(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_id, name, email, body, created_at, updated_at, active
            FROM comments
            WHERE post_id = $1 AND active
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

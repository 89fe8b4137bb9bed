//! PostgreSQL implementation of author repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Author;
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    username: String,
    created_at: DateTime<Utc>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, username: &str) -> Result<Author, AppError> {
        // Unique violations surface as AppError::Conflict via From<sqlx::Error>.
        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (username) VALUES ($1) RETURNING id, username, created_at",
        )
        .bind(username)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, username, created_at FROM authors WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }
}

//! Author entity.

use chrono::{DateTime, Utc};

/// A post author. Deleting an author removes their posts.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

//! Comment entity.

use chrono::{DateTime, Utc};

/// A reader comment attached to a post.
///
/// Only comments with `active = true` are shown on the detail page.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

/// Input data for creating a comment. New comments are always active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

//! Tag entity and tag-overlap projection used for similar-post ranking.

use super::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A published post together with the number of tags it shares with another post.
#[derive(Debug, Clone)]
pub struct TagOverlap {
    pub post: Post,
    pub shared_tags: i64,
}

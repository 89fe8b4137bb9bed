//! Similar-post ranking.

use crate::domain::entities::{Post, TagOverlap};

/// Maximum number of similar posts shown on a detail page.
pub const SIMILAR_POSTS_LIMIT: usize = 4;

/// Ranks tag-overlap candidates for the post `source_id`.
///
/// Drops the source post, unpublished posts and candidates without a shared
/// tag, then orders by shared-tag count descending and publish time
/// descending. The sort is stable: candidates equal on both keys keep the
/// order the store returned them in.
pub fn rank_similar(candidates: Vec<TagOverlap>, source_id: i64, limit: usize) -> Vec<Post> {
    let mut ranked: Vec<TagOverlap> = candidates
        .into_iter()
        .filter(|c| c.post.id != source_id && c.post.is_published() && c.shared_tags > 0)
        .collect();

    ranked.sort_by(|a, b| {
        b.shared_tags
            .cmp(&a.shared_tags)
            .then_with(|| b.post.publish.cmp(&a.post.publish))
    });

    ranked.into_iter().take(limit).map(|c| c.post).collect()
}

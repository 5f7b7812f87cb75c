use std::collections::HashSet;

use crate::domain::entities::Comment;

/// Collect the ids of review comments that someone replied to. Only the
/// review-comment variant participates; the set is built once before
/// filtering and read-only afterward. References that point outside the
/// fetched batch (or at the comment itself) are kept as-is.
pub fn replied_review_comment_ids(comments: &[Comment]) -> HashSet<u64> {
    comments
        .iter()
        .filter_map(|c| match c {
            Comment::Review {
                in_reply_to: Some(target),
                ..
            } => Some(*target),
            _ => None,
        })
        .collect()
}

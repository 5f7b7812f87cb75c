use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle of one overall review pass as reported by the remote side.
///
/// `Pending` means the review was started but never submitted; such a review
/// can be deleted outright, while every submitted review can only be
/// dismissed. Remote states outside the known set are folded into
/// `Commented`, which routes them through dismissal like any other submitted
/// review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictState {
    Pending,
    Commented,
    Approved,
    ChangesRequested,
}

impl VerdictState {
    pub fn from_remote(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "APPROVED" => Self::Approved,
            "CHANGES_REQUESTED" => Self::ChangesRequested,
            _ => Self::Commented,
        }
    }
}

/// Identity of a review pass on the remote side, separate from the comment id
/// carried by the unified sequence. Only the verdict mutations consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewHandle(u64);

impl ReviewHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A line-anchored remark inside a review, as listed by the remote API.
#[derive(Debug, Clone)]
pub struct PullReviewComment {
    pub id: u64,
    pub body: String,
    pub author_login: Option<String>,
    pub in_reply_to_id: Option<u64>,
}

/// A general discussion remark on the pull request's conversation thread.
/// `pull_request_review_id` is set when the remark was posted as part of a
/// review submission.
#[derive(Debug, Clone)]
pub struct PullIssueComment {
    pub id: u64,
    pub body: String,
    pub author_login: Option<String>,
    pub pull_request_review_id: Option<u64>,
}

/// The overall verdict of one review pass.
#[derive(Debug, Clone)]
pub struct PullReview {
    pub id: u64,
    pub body: String,
    pub author_login: Option<String>,
    pub state: VerdictState,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// One item of the unified comment sequence the engine filters and routes.
///
/// Ids are only unique within a variant; routing decisions always go through
/// the variant tag, never the id alone.
#[derive(Debug, Clone)]
pub enum Comment {
    Review {
        id: u64,
        body: String,
        author: Option<String>,
        in_reply_to: Option<u64>,
    },
    Issue {
        id: u64,
        body: String,
        author: Option<String>,
        review_link_id: Option<u64>,
    },
    Verdict {
        id: u64,
        body: String,
        author: Option<String>,
        state: VerdictState,
        submitted_at: Option<DateTime<Utc>>,
        handle: ReviewHandle,
    },
}

impl Comment {
    pub fn id(&self) -> u64 {
        match self {
            Comment::Review { id, .. } | Comment::Issue { id, .. } | Comment::Verdict { id, .. } => {
                *id
            }
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Comment::Review { body, .. }
            | Comment::Issue { body, .. }
            | Comment::Verdict { body, .. } => body,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            Comment::Review { author, .. }
            | Comment::Issue { author, .. }
            | Comment::Verdict { author, .. } => author.as_deref(),
        }
    }
}

/// The three filter dimensions applied to every normalized comment. An empty
/// pattern list and an empty username set both mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub body_contains: Vec<String>,
    pub usernames: HashSet<String>,
    pub no_reply: bool,
}

/// Per-kind outcome counters for one sweep run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepStats {
    pub repo: String,
    pub pull_request: u64,
    pub matched: usize,
    pub deleted_review_comments: usize,
    pub deleted_issue_comments: usize,
    pub deleted_pending_reviews: usize,
    pub dismissed_reviews: usize,
    pub failed: usize,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::VerdictState;

    #[test]
    fn maps_known_remote_states() {
        assert_eq!(VerdictState::from_remote("PENDING"), VerdictState::Pending);
        assert_eq!(VerdictState::from_remote("APPROVED"), VerdictState::Approved);
        assert_eq!(
            VerdictState::from_remote("CHANGES_REQUESTED"),
            VerdictState::ChangesRequested
        );
        assert_eq!(
            VerdictState::from_remote("COMMENTED"),
            VerdictState::Commented
        );
    }

    #[test]
    fn maps_unknown_and_lowercase_states() {
        assert_eq!(VerdictState::from_remote("pending"), VerdictState::Pending);
        assert_eq!(
            VerdictState::from_remote("DISMISSED"),
            VerdictState::Commented
        );
    }
}

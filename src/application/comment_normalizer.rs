use crate::domain::entities::{
    Comment, PullIssueComment, PullReview, PullReviewComment, ReviewHandle,
};

/// Fold the raw remote collections into one unified sequence: review comments
/// first, then issue comments, then verdicts, each keeping its source order.
///
/// Issue comments without a review link are conversational noise for this
/// engine and are dropped here, before any filtering. Verdicts whose body is
/// blank after trimming carry no text to match against and are dropped
/// unconditionally.
pub fn normalize(
    review_comments: Vec<PullReviewComment>,
    issue_comments: Option<Vec<PullIssueComment>>,
    reviews: Option<Vec<PullReview>>,
) -> Vec<Comment> {
    let mut out = Vec::new();

    for c in review_comments {
        out.push(Comment::Review {
            id: c.id,
            body: c.body,
            author: c.author_login,
            in_reply_to: c.in_reply_to_id,
        });
    }

    for c in issue_comments.unwrap_or_default() {
        if c.pull_request_review_id.is_none() {
            continue;
        }
        out.push(Comment::Issue {
            id: c.id,
            body: c.body,
            author: c.author_login,
            review_link_id: c.pull_request_review_id,
        });
    }

    for r in reviews.unwrap_or_default() {
        if r.body.trim().is_empty() {
            continue;
        }
        out.push(Comment::Verdict {
            id: r.id,
            body: r.body,
            author: r.author_login,
            state: r.state,
            submitted_at: r.submitted_at,
            handle: ReviewHandle::new(r.id),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VerdictState;

    fn review_comment(id: u64, body: &str) -> PullReviewComment {
        PullReviewComment {
            id,
            body: body.to_string(),
            author_login: None,
            in_reply_to_id: None,
        }
    }

    fn issue_comment(id: u64, review_link: Option<u64>) -> PullIssueComment {
        PullIssueComment {
            id,
            body: "issue comment".to_string(),
            author_login: Some("alice".to_string()),
            pull_request_review_id: review_link,
        }
    }

    fn review(id: u64, body: &str) -> PullReview {
        PullReview {
            id,
            body: body.to_string(),
            author_login: Some("bob".to_string()),
            state: VerdictState::Approved,
            submitted_at: None,
        }
    }

    #[test]
    fn concatenates_sources_in_fixed_order() {
        let out = normalize(
            vec![review_comment(1, "a"), review_comment(2, "b")],
            Some(vec![issue_comment(3, Some(90))]),
            Some(vec![review(4, "verdict")]),
        );

        let ids = out.iter().map(Comment::id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(matches!(out[0], Comment::Review { .. }));
        assert!(matches!(out[2], Comment::Issue { .. }));
        assert!(matches!(out[3], Comment::Verdict { .. }));
    }

    #[test]
    fn drops_issue_comments_without_review_link() {
        let out = normalize(
            vec![],
            Some(vec![issue_comment(1, None), issue_comment(2, Some(77))]),
            None,
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id(), 2);
    }

    #[test]
    fn drops_verdicts_with_blank_bodies() {
        let out = normalize(
            vec![],
            None,
            Some(vec![review(1, "  \n\t "), review(2, "real verdict")]),
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id(), 2);
    }

    #[test]
    fn preserves_missing_author_as_none() {
        let out = normalize(vec![review_comment(1, "a")], None, None);
        assert_eq!(out[0].author(), None);
    }

    #[test]
    fn absent_optional_collections_yield_review_comments_only() {
        let out = normalize(vec![review_comment(9, "x")], None, None);
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], Comment::Review { .. }));
    }
}

use std::collections::HashSet;

use crate::domain::entities::{Comment, FilterCriteria};

/// Evaluate all three filter dimensions against one comment. Dimensions are
/// AND-ed; patterns within the text dimension are OR-ed. Matching is
/// case-sensitive literal substring search, no normalization.
pub fn matches(comment: &Comment, criteria: &FilterCriteria, reply_graph: &HashSet<u64>) -> bool {
    body_matches(comment.body(), &criteria.body_contains)
        && author_matches(comment.author(), &criteria.usernames)
        && reply_dimension_passes(comment, criteria.no_reply, reply_graph)
}

fn body_matches(body: &str, patterns: &[String]) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| body.contains(p.as_str()))
}

fn author_matches(author: Option<&str>, usernames: &HashSet<String>) -> bool {
    if usernames.is_empty() {
        return true;
    }
    author.map(|a| usernames.contains(a)).unwrap_or(false)
}

/// Reply suppression binds to the review-comment variant only; issue comments
/// and verdicts pass regardless of the flag, even on an id collision with the
/// reply graph.
fn reply_dimension_passes(comment: &Comment, no_reply: bool, reply_graph: &HashSet<u64>) -> bool {
    match comment {
        Comment::Review { id, .. } => !(no_reply && reply_graph.contains(id)),
        Comment::Issue { .. } | Comment::Verdict { .. } => true,
    }
}

/// Build criteria from CLI-level list inputs. Each value may itself carry a
/// newline-separated list; entries are trimmed and blanks dropped.
pub fn criteria_from_inputs(
    body_contains: &[String],
    usernames: &[String],
    no_reply: bool,
) -> FilterCriteria {
    FilterCriteria {
        body_contains: split_list_input(body_contains),
        usernames: split_list_input(usernames).into_iter().collect(),
        no_reply,
    }
}

fn split_list_input(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.lines())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

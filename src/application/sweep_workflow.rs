use anyhow::Result;
use tracing::{debug, info, warn};

use crate::application::{comment_normalizer, predicate, reply_graph};
use crate::domain::{
    entities::{Comment, FilterCriteria, SweepStats, VerdictState},
    ports::GitHubRepository,
};

#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub criteria: FilterCriteria,
    pub include_issue_comments: bool,
    pub include_review_verdicts: bool,
    pub dismiss_message: String,
    pub dry_run: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            include_issue_comments: false,
            include_review_verdicts: false,
            dismiss_message: "Dismissed by delete-pr-comments-action".to_string(),
            dry_run: false,
        }
    }
}

/// One filter-then-act pass over a single pull request: fetch the requested
/// collections, normalize, build the reply graph, filter, then dispatch one
/// remote mutation per surviving comment, strictly in sequence.
pub struct SweepWorkflow<'a> {
    github: &'a dyn GitHubRepository,
    options: SweepOptions,
}

impl<'a> SweepWorkflow<'a> {
    pub fn new(github: &'a dyn GitHubRepository, options: SweepOptions) -> Self {
        Self { github, options }
    }

    pub async fn sweep(&self, owner: &str, repo: &str, pull_number: u64) -> Result<SweepStats> {
        let mut stats = SweepStats {
            repo: format!("{owner}/{repo}"),
            pull_request: pull_number,
            ..SweepStats::default()
        };

        let review_comments = self
            .github
            .list_pull_review_comments(owner, repo, pull_number)
            .await?;
        debug!(count = review_comments.len(), "fetched review comments");

        let issue_comments = if self.options.include_issue_comments {
            let items = self
                .github
                .list_issue_comments(owner, repo, pull_number)
                .await?;
            debug!(count = items.len(), "fetched issue comments");
            Some(items)
        } else {
            None
        };

        let reviews = if self.options.include_review_verdicts {
            let items = self
                .github
                .list_pull_reviews(owner, repo, pull_number)
                .await?;
            debug!(count = items.len(), "fetched review verdicts");
            Some(items)
        } else {
            None
        };

        let comments = comment_normalizer::normalize(review_comments, issue_comments, reviews);
        let replied = reply_graph::replied_review_comment_ids(&comments);
        debug!(
            normalized = comments.len(),
            replied = replied.len(),
            "normalized comment sequence"
        );

        for comment in comments
            .iter()
            .filter(|c| predicate::matches(c, &self.options.criteria, &replied))
        {
            stats.matched += 1;
            if self.options.dry_run {
                info!(id = comment.id(), "dry-run: would remove comment");
                continue;
            }
            // Actions stay independent: a failed mutation is counted and the
            // loop moves on to the remaining items.
            if let Err(err) = self
                .dispatch(owner, repo, pull_number, comment, &mut stats)
                .await
            {
                stats.failed += 1;
                stats.last_error = Some(format!("{err:#}"));
                warn!(id = comment.id(), error = %format!("{err:#}"), "cleanup action failed, continuing");
            }
        }

        Ok(stats)
    }

    async fn dispatch(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        comment: &Comment,
        stats: &mut SweepStats,
    ) -> Result<()> {
        match comment {
            Comment::Review { id, .. } => {
                self.github
                    .delete_pull_review_comment(owner, repo, *id)
                    .await?;
                stats.deleted_review_comments += 1;
            }
            Comment::Issue {
                id, review_link_id, ..
            } => {
                debug!(id, review_link = ?review_link_id, "deleting review-linked issue comment");
                self.github.delete_issue_comment(owner, repo, *id).await?;
                stats.deleted_issue_comments += 1;
            }
            Comment::Verdict {
                state,
                submitted_at,
                handle,
                ..
            } => match state {
                VerdictState::Pending => {
                    self.github
                        .delete_pending_review(owner, repo, pull_number, *handle)
                        .await?;
                    stats.deleted_pending_reviews += 1;
                }
                VerdictState::Commented | VerdictState::Approved | VerdictState::ChangesRequested => {
                    debug!(review = handle.as_u64(), submitted_at = ?submitted_at, "dismissing submitted review");
                    self.github
                        .dismiss_review(
                            owner,
                            repo,
                            pull_number,
                            *handle,
                            &self.options.dismiss_message,
                        )
                        .await?;
                    stats.dismissed_reviews += 1;
                }
            },
        }
        Ok(())
    }
}

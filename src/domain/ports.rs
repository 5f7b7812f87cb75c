use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{PullIssueComment, PullReview, PullReviewComment, ReviewHandle};

pub trait TokenProvider: Send + Sync {
    fn source_name(&self) -> &'static str;
    fn token(&self) -> Result<Option<String>>;
}

pub trait TokenWriter: Send + Sync {
    fn save_token(&self, token: &str) -> Result<()>;
}

/// Remote paging client. Listing operations return full collections (paging
/// is the adapter's concern); mutations act on one identity each.
#[async_trait]
pub trait GitHubRepository: Send + Sync {
    async fn list_pull_review_comments(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<PullReviewComment>>;
    async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<PullIssueComment>>;
    async fn list_pull_reviews(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<PullReview>>;
    async fn delete_pull_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<()>;
    async fn delete_issue_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<()>;
    async fn delete_pending_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review: ReviewHandle,
    ) -> Result<()>;
    async fn dismiss_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review: ReviewHandle,
        message: &str,
    ) -> Result<()>;
}

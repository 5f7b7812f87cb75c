use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    entities::{PullIssueComment, PullReview, PullReviewComment, ReviewHandle, VerdictState},
    ports::GitHubRepository,
};

const PAGE_SIZE: usize = 100;

#[derive(Clone)]
pub struct OctocrabGitHubRepository {
    client: octocrab::Octocrab,
}

impl OctocrabGitHubRepository {
    pub fn new(token: String) -> Result<Self> {
        let client = octocrab::Octocrab::builder()
            .personal_token(token)
            .build()?;
        Ok(Self { client })
    }

    async fn get_paged<T: serde::de::DeserializeOwned>(&self, base_route: &str) -> Result<Vec<T>> {
        let mut page = 1_u32;
        let mut rows: Vec<T> = Vec::new();
        loop {
            let sep = if base_route.contains('?') { '&' } else { '?' };
            let route = format!("{base_route}{sep}per_page={PAGE_SIZE}&page={page}");
            let chunk: Vec<T> = self.client.get(route, None::<&()>).await?;
            let chunk_len = chunk.len();
            rows.extend(chunk);
            if chunk_len < PAGE_SIZE {
                break;
            }
            page = page.saturating_add(1);
        }
        Ok(rows)
    }
}

#[async_trait]
impl GitHubRepository for OctocrabGitHubRepository {
    async fn list_pull_review_comments(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<PullReviewComment>> {
        #[derive(Debug, Deserialize)]
        struct CommentDto {
            id: u64,
            body: Option<String>,
            user: Option<UserDto>,
            in_reply_to_id: Option<u64>,
        }
        #[derive(Debug, Deserialize)]
        struct UserDto {
            login: String,
        }

        let route = format!(
            "/repos/{owner}/{repo}/pulls/{pull_number}/comments?sort=created&direction=desc"
        );
        let items: Vec<CommentDto> = self.get_paged(&route).await?;
        Ok(items
            .into_iter()
            .map(|i| PullReviewComment {
                id: i.id,
                body: i.body.unwrap_or_default(),
                author_login: i.user.map(|u| u.login),
                in_reply_to_id: i.in_reply_to_id,
            })
            .collect())
    }

    async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<PullIssueComment>> {
        #[derive(Debug, Deserialize)]
        struct CommentDto {
            id: u64,
            body: Option<String>,
            user: Option<UserDto>,
            pull_request_review_id: Option<u64>,
        }
        #[derive(Debug, Deserialize)]
        struct UserDto {
            login: String,
        }

        let route = format!("/repos/{owner}/{repo}/issues/{issue_number}/comments");
        let items: Vec<CommentDto> = self.get_paged(&route).await?;
        Ok(items
            .into_iter()
            .map(|i| PullIssueComment {
                id: i.id,
                body: i.body.unwrap_or_default(),
                author_login: i.user.map(|u| u.login),
                pull_request_review_id: i.pull_request_review_id,
            })
            .collect())
    }

    async fn list_pull_reviews(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<PullReview>> {
        #[derive(Debug, Deserialize)]
        struct ReviewDto {
            id: u64,
            body: Option<String>,
            state: Option<String>,
            user: Option<UserDto>,
            submitted_at: Option<DateTime<Utc>>,
        }
        #[derive(Debug, Deserialize)]
        struct UserDto {
            login: String,
        }

        let route = format!("/repos/{owner}/{repo}/pulls/{pull_number}/reviews");
        let items: Vec<ReviewDto> = self.get_paged(&route).await?;
        Ok(items
            .into_iter()
            .map(|i| PullReview {
                id: i.id,
                body: i.body.unwrap_or_default(),
                author_login: i.user.map(|u| u.login),
                state: VerdictState::from_remote(i.state.as_deref().unwrap_or_default()),
                submitted_at: i.submitted_at,
            })
            .collect())
    }

    async fn delete_pull_review_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<()> {
        let route = format!("/repos/{owner}/{repo}/pulls/comments/{comment_id}");
        let _: serde_json::Value = self.client.delete(route, None::<&()>).await?;
        Ok(())
    }

    async fn delete_issue_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<()> {
        let route = format!("/repos/{owner}/{repo}/issues/comments/{comment_id}");
        let _: serde_json::Value = self.client.delete(route, None::<&()>).await?;
        Ok(())
    }

    async fn delete_pending_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review: ReviewHandle,
    ) -> Result<()> {
        let route = format!(
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{}",
            review.as_u64()
        );
        let _: serde_json::Value = self.client.delete(route, None::<&()>).await?;
        Ok(())
    }

    async fn dismiss_review(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
        review: ReviewHandle,
        message: &str,
    ) -> Result<()> {
        let route = format!(
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{}/dismissals",
            review.as_u64()
        );
        let payload = json!({ "message": message });
        let _: serde_json::Value = self.client.put(route, Some(&payload)).await?;
        Ok(())
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid repository format, expected owner/repo: {0}")]
    InvalidRepoFormat(String),
    #[error("no GitHub token found (checked: gh auth token, GITHUB_TOKEN, stored token)")]
    MissingToken,
}

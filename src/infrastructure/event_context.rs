use std::{env, fs};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::errors::DomainError;

/// Repository and pull-request identity carried by the invoking CI event.
/// Both parts are optional here; the caller decides which absences are fatal.
#[derive(Debug, Clone, Default)]
pub struct EventContext {
    pub repository: Option<String>,
    pub pull_request_number: Option<u64>,
}

impl EventContext {
    pub fn from_env() -> Result<Self> {
        let repository = env::var("GITHUB_REPOSITORY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let pull_request_number = match env::var("GITHUB_EVENT_PATH") {
            Ok(path) if !path.trim().is_empty() => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read event payload: {path}"))?;
                parse_event_number(&raw)?
            }
            _ => None,
        };

        Ok(Self {
            repository,
            pull_request_number,
        })
    }
}

/// Extract the pull-request number from an event payload. Issue events carry
/// the number under `issue` instead of `pull_request`; payloads with neither
/// simply have no unit of work, which is not an error.
pub fn parse_event_number(raw: &str) -> Result<Option<u64>> {
    #[derive(Debug, Deserialize)]
    struct EventDto {
        pull_request: Option<NumberedDto>,
        issue: Option<NumberedDto>,
    }
    #[derive(Debug, Deserialize)]
    struct NumberedDto {
        number: u64,
    }

    let event: EventDto =
        serde_json::from_str(raw).with_context(|| "invalid event payload JSON".to_string())?;
    Ok(event
        .pull_request
        .map(|p| p.number)
        .or(event.issue.map(|i| i.number)))
}

pub fn split_repo(full_name: &str) -> Result<(&str, &str)> {
    let mut parts = full_name.split('/');
    let owner = parts.next().unwrap_or_default();
    let repo = parts.next().unwrap_or_default();
    let extra = parts.next();

    if owner.is_empty() || repo.is_empty() || extra.is_some() {
        return Err(DomainError::InvalidRepoFormat(full_name.to_string()).into());
    }
    Ok((owner, repo))
}

#[cfg(test)]
mod tests {
    use super::{parse_event_number, split_repo};

    #[test]
    fn reads_number_from_pull_request_events() {
        let raw = r#"{"pull_request": {"number": 42}}"#;
        assert_eq!(parse_event_number(raw).expect("parse"), Some(42));
    }

    #[test]
    fn falls_back_to_issue_number() {
        let raw = r#"{"issue": {"number": 7}}"#;
        assert_eq!(parse_event_number(raw).expect("parse"), Some(7));
    }

    #[test]
    fn payload_without_a_number_is_a_benign_gap() {
        let raw = r#"{"action": "push"}"#;
        assert_eq!(parse_event_number(raw).expect("parse"), None);
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(parse_event_number("not json").is_err());
    }

    #[test]
    fn splits_owner_and_repo() {
        let (owner, repo) = split_repo("octocat/hello-world").expect("split");
        assert_eq!(owner, "octocat");
        assert_eq!(repo, "hello-world");
    }

    #[test]
    fn rejects_malformed_repo_names() {
        assert!(split_repo("just-a-name").is_err());
        assert!(split_repo("a/b/c").is_err());
        assert!(split_repo("/repo").is_err());
    }
}

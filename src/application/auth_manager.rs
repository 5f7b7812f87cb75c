use anyhow::{bail, Result};

use crate::domain::errors::DomainError;
use crate::domain::ports::{TokenProvider, TokenWriter};

#[derive(Debug, Clone)]
pub struct TokenResolution {
    pub source: &'static str,
    pub token: String,
}

/// Walks an ordered provider chain and reports the first token found.
pub struct AuthManager<'a> {
    providers: Vec<&'a dyn TokenProvider>,
    stored: &'a dyn TokenWriter,
}

impl<'a> AuthManager<'a> {
    pub fn new(providers: Vec<&'a dyn TokenProvider>, stored: &'a dyn TokenWriter) -> Self {
        Self { providers, stored }
    }

    pub fn resolve_token(&self) -> Result<Option<TokenResolution>> {
        for provider in &self.providers {
            if let Some(token) = provider.token()? {
                return Ok(Some(TokenResolution {
                    source: provider.source_name(),
                    token,
                }));
            }
        }
        Ok(None)
    }

    /// A sweep cannot run unauthenticated; a missing token is a fatal
    /// configuration error raised before any remote call.
    pub fn require_token(&self) -> Result<TokenResolution> {
        self.resolve_token()?
            .ok_or_else(|| DomainError::MissingToken.into())
    }

    pub fn login(&self, token: &str) -> Result<()> {
        let cleaned = token.trim();
        if cleaned.is_empty() {
            bail!("token cannot be empty");
        }
        self.stored.save_token(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct FixedProvider {
        name: &'static str,
        value: Option<&'static str>,
    }

    impl TokenProvider for FixedProvider {
        fn source_name(&self) -> &'static str {
            self.name
        }

        fn token(&self) -> Result<Option<String>> {
            Ok(self.value.map(str::to_string))
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        saved: Mutex<Option<String>>,
    }

    impl TokenWriter for RecordingWriter {
        fn save_token(&self, token: &str) -> Result<()> {
            *self.saved.lock().expect("lock") = Some(token.to_string());
            Ok(())
        }
    }

    #[test]
    fn first_provider_with_a_token_wins() {
        let empty = FixedProvider {
            name: "first",
            value: None,
        };
        let filled = FixedProvider {
            name: "second",
            value: Some("ghp_token"),
        };
        let writer = RecordingWriter::default();
        let manager = AuthManager::new(vec![&empty, &filled], &writer);

        let resolution = manager.resolve_token().expect("resolve").expect("some");
        assert_eq!(resolution.source, "second");
        assert_eq!(resolution.token, "ghp_token");
    }

    #[test]
    fn require_token_fails_when_chain_is_empty_handed() {
        let empty = FixedProvider {
            name: "only",
            value: None,
        };
        let writer = RecordingWriter::default();
        let manager = AuthManager::new(vec![&empty], &writer);

        let err = manager.require_token().expect_err("must fail");
        assert!(err.to_string().contains("no GitHub token found"));
    }

    #[test]
    fn login_trims_and_rejects_blank_tokens() {
        let writer = RecordingWriter::default();
        let manager = AuthManager::new(vec![], &writer);

        manager.login("  ghp_abc  ").expect("login");
        assert_eq!(
            writer.saved.lock().expect("lock").as_deref(),
            Some("ghp_abc")
        );
        assert!(manager.login("   ").is_err());
    }
}

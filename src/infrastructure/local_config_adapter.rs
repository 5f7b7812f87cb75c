use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

/// Local per-user config directory holding the stored token.
#[derive(Debug, Clone)]
pub struct LocalConfigDir {
    config_root: PathBuf,
}

impl LocalConfigDir {
    pub fn new() -> Result<Self> {
        let root = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("delete-pr-comments");
        Self::at(root)
    }

    pub fn at(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create config dir: {}", root.display()))?;
        Ok(Self { config_root: root })
    }

    pub fn auth_token_path(&self) -> PathBuf {
        self.config_root.join("auth_token")
    }
}

#[cfg(test)]
mod tests {
    use super::LocalConfigDir;

    #[test]
    fn creates_the_directory_and_derives_the_token_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = LocalConfigDir::at(tmp.path().join("nested").join("config")).expect("config dir");

        let token_path = dir.auth_token_path();
        assert!(token_path.parent().expect("parent").is_dir());
        assert_eq!(token_path.file_name().expect("file name"), "auth_token");
    }
}

use std::process::Command;

use anyhow::{Context, Result};

pub trait ShellAdapter: Send + Sync {
    fn run_capture(&self, program: &str, args: &[&str]) -> Result<String>;
}

#[derive(Debug, Default)]
pub struct CommandShellAdapter;

impl ShellAdapter for CommandShellAdapter {
    fn run_capture(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute command: {}", program))?;

        if !output.status.success() {
            anyhow::bail!(
                "command exited with status {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

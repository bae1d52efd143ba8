use crate::errors::{Result, WfError};
use std::process::Command;

/// Runs git with the given arguments and returns its stdout
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<String>;
}

pub struct GitCliImpl;

impl GitCliImpl {
    pub fn new() -> Self {
        Self
    }
}

impl GitRunner for GitCliImpl {
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        log::debug!("Running git {}", command);

        let output = Command::new("git").args(args).output().map_err(|e| {
            WfError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to execute git {}: {}", command, e),
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("git {} exited with {}: {}", command, output.status, stderr);
            return Err(WfError::Git { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
pub use mock::MockGitRunner;

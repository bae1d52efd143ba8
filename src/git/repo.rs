use crate::{
    errors::Result,
    git::{Branch, GitRunner, RepositoryStatus},
    parser::{branches_from_string, status_from_string},
};

/// Typed git operations over a [`GitRunner`]
///
/// Every call blocks until git exits. Nothing is cached, so callers have
/// to query again after mutating the repository.
pub struct Git<R: GitRunner> {
    runner: R,
}

impl<R: GitRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn status(&self) -> Result<RepositoryStatus> {
        let output = self.runner.run(&["status", "--short"])?;
        Ok(status_from_string(&output))
    }

    pub fn current_branch(&self) -> Result<String> {
        let output = self.runner.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim().to_string())
    }

    pub fn remote_url(&self, remote: &str) -> Result<String> {
        let output = self.runner.run(&["remote", "get-url", "--push", remote])?;
        Ok(output.trim().to_string())
    }

    /// `git checkout` with the given options: a branch, `-b <name>` or `-`
    pub fn checkout(&self, options: &[&str]) -> Result<()> {
        let mut args = vec!["checkout"];
        args.extend_from_slice(options);
        self.runner.run(&args).map(|_| ())
    }

    pub fn fetch(&self) -> Result<()> {
        self.runner.run(&["fetch"]).map(|_| ())
    }

    pub fn reset(&self, mode: &str, target: &str) -> Result<()> {
        self.runner.run(&["reset", mode, target]).map(|_| ())
    }

    pub fn push_with_upstream(&self, remote: &str, branch: &str) -> Result<()> {
        self.runner
            .run(&["push", "--set-upstream", remote, branch])
            .map(|_| ())
    }

    pub fn stash(&self) -> Result<()> {
        self.runner.run(&["stash"]).map(|_| ())
    }

    pub fn stash_pop(&self) -> Result<()> {
        self.runner.run(&["stash", "pop"]).map(|_| ())
    }

    /// List local branches, filtered by `mode` (e.g. `--merged`)
    pub fn branches(&self, mode: &str) -> Result<Vec<Branch>> {
        let output = self.runner.run(&["branch", mode])?;
        Ok(branches_from_string(&output))
    }

    pub fn delete_branch(&self, name: &str) -> Result<()> {
        self.runner.run(&["branch", "-d", name]).map(|_| ())
    }

    pub fn prune_remote(&self, remote: &str) -> Result<()> {
        self.runner.run(&["remote", "prune", remote]).map(|_| ())
    }
}

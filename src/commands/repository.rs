use crate::{
    config::Config,
    core::prune_branches,
    errors::Result,
    git::{Git, GitRunner},
};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum RepositoryCommands {
    /// Delete local branches merged into the main branch and prune origin
    Prune(Prune),
}

impl RepositoryCommands {
    pub fn execute<R: GitRunner>(&self, git: &Git<R>, config: &Config) -> Result<()> {
        match self {
            RepositoryCommands::Prune(prune) => prune.execute(git, config),
        }
    }
}

#[derive(Debug, Args)]
pub struct Prune {}

impl Prune {
    pub fn execute<R: GitRunner>(&self, git: &Git<R>, config: &Config) -> Result<()> {
        let report = prune_branches(git, config)?;
        log::info!(
            "Pruned {} branches, {} could not be deleted",
            report.deleted.len(),
            report.failed.len()
        );
        Ok(())
    }
}

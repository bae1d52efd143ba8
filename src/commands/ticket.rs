use crate::{
    config::Config,
    core::{open_pull_request, push_branch, start_ticket, StartOutcome},
    errors::Result,
    git::{Git, GitRunner},
    interact::{StdinPrompt, SystemOpener},
};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum TicketCommands {
    /// Create a ticket branch from an up to date main branch
    Start(Start),
    /// Push the current branch and set its upstream
    Push(Push),
    /// Open the new pull request page for the current branch
    OpenPullRequest(OpenPullRequest),
}

impl TicketCommands {
    pub fn execute<R: GitRunner>(&self, git: &Git<R>, config: &Config) -> Result<()> {
        match self {
            TicketCommands::Start(start) => start.execute(git, config),
            TicketCommands::Push(push) => push.execute(git, config),
            TicketCommands::OpenPullRequest(open) => open.execute(git, config),
        }
    }
}

#[derive(Debug, Args)]
pub struct Start {
    /// Ticket identifier, e.g. 123 or PROJ-42
    pub ticket: String,

    /// Words describing the ticket, joined with dashes in the branch name
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,
}

impl Start {
    pub fn execute<R: GitRunner>(&self, git: &Git<R>, config: &Config) -> Result<()> {
        match start_ticket(git, &StdinPrompt, config, &self.ticket, &self.description)? {
            StartOutcome::Created {
                branch,
                moved_changes,
            } => log::info!("Started {} (moved changes: {})", branch, moved_changes),
            StartOutcome::Aborted => log::info!("Ticket start declined"),
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct Push {}

impl Push {
    pub fn execute<R: GitRunner>(&self, git: &Git<R>, config: &Config) -> Result<()> {
        push_branch(git, config)?;
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct OpenPullRequest {}

impl OpenPullRequest {
    pub fn execute<R: GitRunner>(&self, git: &Git<R>, config: &Config) -> Result<()> {
        open_pull_request(git, &SystemOpener, config)?;
        Ok(())
    }
}

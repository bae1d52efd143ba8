use clap::Parser;
use clap::Subcommand;
use commands::repository::RepositoryCommands;
use commands::ticket::TicketCommands;
use config::Config;
use git::{Git, GitCliImpl};

mod commands;
mod config;
mod core;
mod errors;
mod git;
mod interact;
mod parser;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "wf")]
#[command(about = "Automates the ticket branch git workflow", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Work on ticket branches
    #[command(subcommand)]
    Ticket(TicketCommands),
    /// Maintain the local repository
    #[command(subcommand)]
    Repository(RepositoryCommands),
}

fn main() {
    env_logger::init();

    let args = Cli::parse();

    let config = Config::from_env();
    let git = Git::new(GitCliImpl::new());

    let result = match args.command {
        Commands::Ticket(ticket) => ticket.execute(&git, &config),
        Commands::Repository(repository) => repository.execute(&git, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

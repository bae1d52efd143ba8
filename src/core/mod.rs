use crate::{
    config::Config,
    errors::{Result, StepContext, WfError},
    git::{Git, GitRunner, RemoteRef},
    interact::{Prompt, UrlOpener},
    parser::remote_url_from_string,
};


const CONFIRM_MOVE_CHANGES: &str =
    "Found changes to be committed, would like to continue and move the changes?";

#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    Created { branch: String, moved_changes: bool },
    Aborted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedDeletion {
    pub branch: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PruneReport {
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDeletion>,
}

/// Create a ticket branch on top of a freshly reset main branch
///
/// Uncommitted changes are stashed and reapplied on the new branch once
/// the user agrees to move them.
pub fn start_ticket<R: GitRunner, P: Prompt>(
    git: &Git<R>,
    prompt: &P,
    config: &Config,
    ticket: &str,
    description: &[String],
) -> Result<StartOutcome> {
    let main_branch = config.main_branch.as_str();
    let upstream = RemoteRef::new(&config.remote, main_branch).to_string();

    let has_changes = git.status().step("error reading git status")?.has_changes();
    let branch = config.branch_name(ticket, &description.join("-"))?;

    if has_changes {
        let confirmed = prompt
            .confirm(CONFIRM_MOVE_CHANGES)
            .step("error getting confirmation")?;
        if !confirmed {
            println!("Aborting...");
            return Ok(StartOutcome::Aborted);
        }

        println!("Stashing changes");
        git.stash().step("error stashing changes")?;
    }

    println!("Updating {} branch", main_branch);
    git.checkout(&[main_branch])
        .with_step(|| format!("error changing to {} branch", main_branch))?;

    git.fetch().step("error fetching remote changes")?;

    git.reset("--hard", &upstream)
        .with_step(|| format!("error resetting to {}", upstream))?;

    println!("Creating new branch '{}' from '{}'", branch, main_branch);
    git.checkout(&["-b", branch.as_str()])
        .with_step(|| format!("error creating new branch '{}'", branch))?;

    if has_changes {
        println!("Applying changes");
        git.stash_pop().step("error applying changes")?;
    }

    Ok(StartOutcome::Created {
        branch,
        moved_changes: has_changes,
    })
}

/// Push the current branch and track it upstream
///
/// Refuses to push the main branch
pub fn push_branch<R: GitRunner>(git: &Git<R>, config: &Config) -> Result<String> {
    let branch = git
        .current_branch()
        .step("error getting current branch")?;

    if branch == config.main_branch {
        return Err(WfError::PushToMainBranch(branch));
    }

    git.push_with_upstream(&config.remote, &branch)
        .step("error pushing to remote")?;

    println!("Pushed to {}", RemoteRef::new(&config.remote, &branch));
    Ok(branch)
}

/// Open the "new pull request" page for the current branch
pub fn open_pull_request<R: GitRunner, O: UrlOpener>(
    git: &Git<R>,
    opener: &O,
    config: &Config,
) -> Result<String> {
    let remote_url = git
        .remote_url(&config.remote)
        .step("error getting remote url")?;

    let branch = git
        .current_branch()
        .step("error getting current branch")?;

    let url = remote_url_from_string(&remote_url)?.pull_request_url(&branch);

    log::info!("Opening pull request page {}", url);
    opener.open(&url).step("error opening browser")?;
    Ok(url)
}

/// Delete local branches already merged into the main branch
///
/// The user is put back on the branch they started from unless that
/// branch was deleted. Failed deletions do not stop the prune and are
/// returned in the report.
pub fn prune_branches<R: GitRunner>(git: &Git<R>, config: &Config) -> Result<PruneReport> {
    let main_branch = config.main_branch.as_str();
    let upstream = RemoteRef::new(&config.remote, main_branch).to_string();

    if git.status().step("error reading git status")?.has_changes() {
        return Err(WfError::UncommittedChanges);
    }

    let previous_branch = git
        .current_branch()
        .step("error getting current branch")?;

    println!("Updating {} branch", main_branch);
    git.fetch().step("error fetching remote changes")?;

    if previous_branch != main_branch {
        git.checkout(&[main_branch])
            .with_step(|| format!("error changing to {} branch", main_branch))?;
    }

    git.reset("--hard", &upstream)
        .with_step(|| format!("error resetting to {}", upstream))?;

    let merged = git.branches("--merged").step("error listing branches")?;

    let mut report = PruneReport::default();
    for branch in merged {
        if branch.current || branch.name == upstream {
            continue;
        }

        println!("* Deleting branch: {}", branch.name);
        match git.delete_branch(&branch.name) {
            Ok(()) => report.deleted.push(branch.name),
            Err(e) => {
                log::warn!("Failed to delete branch {}: {}", branch.name, e);
                report.failed.push(FailedDeletion {
                    branch: branch.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    let deleted_previous = report.deleted.contains(&previous_branch);
    if previous_branch != main_branch && !deleted_previous {
        git.checkout(&["-"])
            .step("error changing back to previous branch")?;
    }

    git.prune_remote(&config.remote).step("error pruning remote")?;

    for failure in &report.failed {
        println!("Could not delete branch {}: {}", failure.branch, failure.reason);
    }

    Ok(report)
}

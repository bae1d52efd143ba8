use super::*;
use crate::{errors::WfError, git::cli::MockGitRunner};

fn git_with(runner: MockGitRunner) -> Git<MockGitRunner> {
    Git::new(runner)
}

#[test]
fn test_status_runs_short_status() {
    let git = git_with(MockGitRunner::new().with_output("status --short", " M README.md\n"));

    let status = git.status().unwrap();

    assert!(status.has_changes());
    assert_eq!(status.changed_files, vec!["README.md".to_string()]);
    assert_eq!(git.runner().get_calls(), vec!["status --short"]);
}

#[test]
fn test_current_branch_is_trimmed() {
    let git = git_with(
        MockGitRunner::new().with_output("rev-parse --abbrev-ref HEAD", "123/fix-bug\n"),
    );

    assert_eq!(git.current_branch().unwrap(), "123/fix-bug");
}

#[test]
fn test_remote_url_uses_push_url() {
    let git = git_with(MockGitRunner::new().with_output(
        "remote get-url --push origin",
        "git@github.com:owner/repo.git\n",
    ));

    assert_eq!(
        git.remote_url("origin").unwrap(),
        "git@github.com:owner/repo.git"
    );
}

#[test]
fn test_mutating_commands_build_expected_arguments() {
    let git = git_with(MockGitRunner::new());

    git.checkout(&["main"]).unwrap();
    git.checkout(&["-b", "123/fix-bug"]).unwrap();
    git.checkout(&["-"]).unwrap();
    git.fetch().unwrap();
    git.reset("--hard", &RemoteRef::new("origin", "main").to_string())
        .unwrap();
    git.push_with_upstream("origin", "123/fix-bug").unwrap();
    git.stash().unwrap();
    git.stash_pop().unwrap();
    git.delete_branch("done").unwrap();
    git.prune_remote("origin").unwrap();

    assert_eq!(
        git.runner().get_calls(),
        vec![
            "checkout main",
            "checkout -b 123/fix-bug",
            "checkout -",
            "fetch",
            "reset --hard origin/main",
            "push --set-upstream origin 123/fix-bug",
            "stash",
            "stash pop",
            "branch -d done",
            "remote prune origin",
        ]
    );
}

#[test]
fn test_merged_branches_are_parsed() {
    let git = git_with(
        MockGitRunner::new().with_output("branch --merged", "* main\n  done-feature\n"),
    );

    let branches = git.branches("--merged").unwrap();

    assert_eq!(
        branches,
        vec![
            Branch {
                name: "main".to_string(),
                current: true
            },
            Branch {
                name: "done-feature".to_string(),
                current: false
            },
        ]
    );
}

#[test]
fn test_failure_is_surfaced() {
    let git = git_with(MockGitRunner::new().with_failure("fetch"));

    let err = git.fetch().unwrap_err();

    match err {
        WfError::Git { command, .. } => assert_eq!(command, "fetch"),
        other => panic!("unexpected error: {:?}", other),
    }
}

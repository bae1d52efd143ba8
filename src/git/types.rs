use std::fmt;

/// Changed files reported by `git status --short`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryStatus {
    pub changed_files: Vec<String>,
}

impl RepositoryStatus {
    pub fn has_changes(&self) -> bool {
        !self.changed_files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub name: String,
    pub current: bool,
}

/// A branch on a remote, rendered as `remote/branch`
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRef<'a> {
    pub remote: &'a str,
    pub branch: &'a str,
}

impl<'a> RemoteRef<'a> {
    pub fn new(remote: &'a str, branch: &'a str) -> Self {
        Self { remote, branch }
    }
}

impl fmt::Display for RemoteRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.branch)
    }
}

/// Parts of an SSH remote such as `git@github.com:owner/repo.git`
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteUrl {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl RemoteUrl {
    pub fn pull_request_url(&self, branch: &str) -> String {
        format!(
            "https://{}/{}/{}/pull/new/{}",
            self.host, self.owner, self.repo, branch
        )
    }
}

// Parsing of git porcelain output

use crate::{
    errors::{Result, WfError},
    git::{Branch, RemoteUrl, RepositoryStatus},
};
use regex::Regex;
use std::sync::LazyLock;

static CHANGED_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ MADRCU]{2}\s+(?P<path>.+)$").expect("valid regex"));

static BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<marker>[ *]) (?P<name>[^ (].*)$").expect("valid regex"));

static REMOTE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@(?P<host>[^:]+):(?P<owner>.+)/(?P<repo>[^/]+)\.git$").expect("valid regex")
});

/// Collect the paths of tracked files with changes
///
/// Untracked (`??`) and ignored (`!!`) entries are not changes
pub fn status_from_string(output: &str) -> RepositoryStatus {
    let changed_files = output
        .lines()
        .filter_map(|line| CHANGED_FILE_RE.captures(line))
        .filter_map(|caps| caps.name("path"))
        .map(|path| path.as_str().trim_end().to_string())
        .collect();

    RepositoryStatus { changed_files }
}

pub fn branches_from_string(output: &str) -> Vec<Branch> {
    output
        .lines()
        .filter_map(|line| BRANCH_RE.captures(line))
        .filter_map(|caps| {
            let marker = caps.name("marker")?;
            let name = caps.name("name")?;
            Some(Branch {
                name: name.as_str().trim_end().to_string(),
                current: marker.as_str() == "*",
            })
        })
        .collect()
}

pub fn remote_url_from_string(url: &str) -> Result<RemoteUrl> {
    let caps = REMOTE_URL_RE
        .captures(url.trim())
        .ok_or_else(|| WfError::RemoteUrl(url.to_string()))?;

    let part = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| WfError::RemoteUrl(url.to_string()))
    };

    Ok(RemoteUrl {
        host: part("host")?,
        owner: part("owner")?,
        repo: part("repo")?,
    })
}

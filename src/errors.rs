use thiserror::Error;

#[derive(Error, Debug)]
pub enum WfError {
    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("can't parse remote url: {0}")]
    RemoteUrl(String),

    #[error("current branch is {0}, refusing to push to the main branch")]
    PushToMainBranch(String),

    #[error("your current branch has uncommitted changes, aborting")]
    UncommittedChanges,

    #[error("invalid branch name template: {0}")]
    Template(String),

    #[error("{step}: {source}")]
    Step {
        step: String,
        #[source]
        source: Box<WfError>,
    },
}

impl WfError {
    /// Wrap the error with the workflow step that produced it
    pub fn during(self, step: impl Into<String>) -> Self {
        WfError::Step {
            step: step.into(),
            source: Box::new(self),
        }
    }
}

/// Attach a step description to a failing result
pub trait StepContext<T> {
    fn step(self, step: impl Into<String>) -> Result<T>;

    fn with_step<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T> StepContext<T> for Result<T> {
    fn step(self, step: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.during(step))
    }

    fn with_step<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| e.during(f()))
    }
}

pub type Result<T> = std::result::Result<T, WfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_prefixes_message() {
        let result: Result<()> = Err(WfError::Git {
            command: "fetch".to_string(),
            stderr: "could not resolve host".to_string(),
        });
        let err = result.step("error fetching remote changes").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error fetching remote changes: git fetch failed: could not resolve host"
        );
    }

    #[test]
    fn test_push_to_main_names_branch() {
        let err = WfError::PushToMainBranch("main".to_string());
        assert!(err.to_string().contains("main"));
    }
}

pub mod cli;
pub mod repo;
pub mod types;

#[cfg(test)]
mod tests;

pub use cli::{GitCliImpl, GitRunner};
pub use repo::Git;
pub use types::{Branch, RemoteRef, RemoteUrl, RepositoryStatus};

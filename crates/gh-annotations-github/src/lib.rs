//! GitHub Actions source for gh-annotations
//!
//! Talks to the GitHub REST API through octocrab:
//! - `client` - the [`GitHubClient`] implementing `ActionsSource`
//! - `config` - API endpoint, token and page size
//!
//! # Example Usage
//!
//! ```no_run
//! use gh_annotations_api::{ActionsSource, RepoRef};
//! use gh_annotations_github::{GitHubClient, GitHubConfig};
//!
//! # async fn demo() -> gh_annotations_api::SourceResult<()> {
//! let client = GitHubClient::new(&GitHubConfig::for_host("github.com"))?;
//! let runs = client.fetch_runs(&RepoRef::new("owner", "repo")).await?;
//! println!("{} runs", runs.workflow_runs.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;

pub use client::GitHubClient;
pub use config::{
    build_api_url,
    GitHubConfig,
    DEFAULT_HOST,
};

//! gh-annotations
//!
//! Lists the check annotations of the latest run of every GitHub Actions
//! workflow in a repository, one row per annotation.
//!
//! The driver resolves the repository, builds the GitHub client from explicit
//! configuration, runs the aggregation and renders the records.

mod args;
pub mod repo;

use std::io::Write;

use anyhow::Context;
use gh_annotations_api::RepoRef;
use gh_annotations_core::{
    render,
    AggregateOptions,
    Aggregator,
    OutputFormat,
};
pub use gh_annotations_core::Destination;
use gh_annotations_github::{
    GitHubClient,
    GitHubConfig,
};

pub use args::Args;

/// Builds the client configuration for `repo`
pub fn github_config(args: &Args, repo: &RepoRef) -> GitHubConfig {
    let config = match &args.api_url {
        Some(url) => GitHubConfig::with_api_url(url.as_str()),
        None => GitHubConfig::for_host(&repo::api_host(repo, std::env::var("GH_HOST").ok())),
    };

    config
        .token(GitHubConfig::token_from_env())
        .per_page(args.per_page)
}

/// Fetches and renders everything; nothing is written unless every request
/// succeeded.
pub async fn run<W: Write>(
    args: &Args, out: &mut W, destination: Destination,
) -> anyhow::Result<()> {
    let repo = repo::resolve(args.repo.as_deref())?;
    let config = github_config(args, &repo);
    tracing::debug!("Using {} for {repo}", config.api_url);

    let client = GitHubClient::new(&config).context("Failed to set up the GitHub client")?;

    let options = AggregateOptions {
        max_concurrency: usize::from(args.max_concurrency),
        sort_by_created: args.sort_by_created,
    };
    let records = Aggregator::new(&client, options)
        .collect(&repo)
        .await
        .with_context(|| format!("Failed to collect annotations for {repo}"))?;

    render(&records, OutputFormat::select(args.json, destination), out)
        .context("Failed to write output")?;

    Ok(())
}

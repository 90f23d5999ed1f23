use clap::Parser;
use gh_annotations_core::application::DEFAULT_MAX_CONCURRENCY;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gh-annotations",
    version,
    about = "List check annotations from the latest run of every workflow in a repository"
)]
pub struct Args {
    /// Repository to inspect, as [HOST/]OWNER/REPO
    /// Defaults to the `origin` remote of the current git checkout
    #[arg(short = 'R', long, env = "GH_REPO")]
    pub repo: Option<String>,

    /// Print a JSON array instead of a table
    #[arg(long)]
    pub json: bool,

    /// Page size for the runs and jobs requests (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub per_page: Option<u8>,

    /// Maximum number of API requests in flight
    #[arg(
        long,
        env = "GH_ANNOTATIONS_MAX_CONCURRENCY",
        default_value_t = DEFAULT_MAX_CONCURRENCY as u16,
        value_parser = clap::value_parser!(u16).range(1..=64)
    )]
    pub max_concurrency: u16,

    /// Sort runs by creation time before picking the latest run per workflow
    #[arg(long)]
    pub sort_by_created: bool,

    /// Override the API base URL
    #[arg(long, env = "GH_ANNOTATIONS_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

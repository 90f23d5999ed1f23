use std::future::Future;

use futures::future::try_join_all;
use gh_annotations_api::{
    ActionsSource,
    RepoRef,
    SourceError,
    SourceResult,
    WorkflowRun,
};
use tokio::sync::Semaphore;
use tracing::{
    debug,
    info,
};

use super::dedup::{
    latest_runs,
    sort_newest_first,
};
use crate::domain::{
    flatten,
    FlatRecord,
    JobNode,
    RunNode,
};
use crate::error::CoreResult;

pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Upper bound on in-flight API calls; 1 issues them one at a time
    pub max_concurrency: usize,
    /// Order runs by `created_at` before picking the latest per workflow
    /// instead of trusting the API ordering
    pub sort_by_created: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            sort_by_created: false,
        }
    }
}

/// Fetches the latest run of every workflow, its jobs and their annotations.
///
/// Jobs of different runs and annotations of different jobs are fetched
/// concurrently, bounded by a semaphore. Results are joined back in input
/// order, so the output matches a sequential run → job → annotation walk.
/// The first failing call aborts the whole aggregation.
pub struct Aggregator<'a> {
    source: &'a dyn ActionsSource,
    options: AggregateOptions,
    permits: Semaphore,
}

impl<'a> Aggregator<'a> {
    pub fn new(source: &'a dyn ActionsSource, options: AggregateOptions) -> Self {
        let permits = Semaphore::new(options.max_concurrency.max(1));
        Self {
            source,
            options,
            permits,
        }
    }

    /// Runs the full pipeline and returns the flattened rows
    pub async fn collect(&self, repo: &RepoRef) -> CoreResult<Vec<FlatRecord>> {
        let tree = self.fetch_tree(repo).await?;
        let records = flatten(repo, &tree);
        info!(
            "{repo}: {} annotations across {} workflows",
            records.len(),
            tree.len()
        );
        Ok(records)
    }

    pub async fn fetch_tree(&self, repo: &RepoRef) -> SourceResult<Vec<RunNode>> {
        let runs = self
            .limited(self.source.fetch_runs(repo))
            .await?
            .workflow_runs;
        let fetched = runs.len();

        let runs = if self.options.sort_by_created {
            sort_newest_first(runs)
        } else {
            runs
        };
        let latest = latest_runs(runs);
        debug!(
            "{repo}: kept {} of {fetched} runs (one per workflow) from {}",
            latest.len(),
            self.source.name()
        );

        try_join_all(latest.into_iter().map(|run| self.fetch_run(repo, run))).await
    }

    async fn fetch_run(&self, repo: &RepoRef, run: WorkflowRun) -> SourceResult<RunNode> {
        let jobs = self
            .limited(self.source.fetch_jobs(repo, &run))
            .await?
            .jobs;

        let jobs = try_join_all(jobs.into_iter().map(|job| async move {
            let annotations = self
                .limited(self.source.fetch_annotations(repo, &job))
                .await?;
            Ok::<_, SourceError>(JobNode { job, annotations })
        }))
        .await?;

        Ok(RunNode { run, jobs })
    }

    /// Holds a permit only while the single call is in flight, so nested
    /// fan-out never waits on a permit held by its own parent.
    async fn limited<T, F>(&self, call: F) -> SourceResult<T>
    where
        F: Future<Output = SourceResult<T>>,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| SourceError::Internal(format!("Request limiter closed: {e}")))?;
        call.await
    }
}

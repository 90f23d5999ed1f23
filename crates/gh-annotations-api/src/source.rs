use async_trait::async_trait;

use crate::error::SourceResult;
use crate::repo::RepoRef;
use crate::types::*;

/// A backend able to list workflow runs, their jobs and the jobs' annotations
///
/// Each call is a single request for a single page; implementations do not
/// retry or follow pagination.
#[async_trait]
pub trait ActionsSource: Send + Sync {
    /// Short identifier used in log lines (e.g. "github")
    fn name(&self) -> &str;

    /// Fetch the most recent workflow runs of a repository, newest first
    async fn fetch_runs(&self, repo: &RepoRef) -> SourceResult<WorkflowRunList>;

    /// Fetch the jobs of one run
    async fn fetch_jobs(&self, repo: &RepoRef, run: &WorkflowRun) -> SourceResult<JobList>;

    /// Fetch the check run annotations of one job
    async fn fetch_annotations(&self, repo: &RepoRef, job: &Job)
        -> SourceResult<Vec<Annotation>>;
}

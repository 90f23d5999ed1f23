use async_trait::async_trait;
use gh_annotations_api::{
    ActionsSource,
    Annotation,
    Job,
    JobList,
    RepoRef,
    SourceError,
    SourceResult,
    WorkflowRun,
    WorkflowRunList,
};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{
    debug,
    warn,
};

use crate::config::GitHubConfig;

pub struct GitHubClient {
    octocrab: Octocrab,
    per_page: Option<u8>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> SourceResult<Self> {
        let mut builder = Octocrab::builder()
            .base_uri(config.api_url.clone())
            .map_err(|e| {
                SourceError::InvalidConfig(format!("Invalid API URL {}: {e}", config.api_url))
            })?
            .add_retry_config(RetryConfig::None);

        match &config.token {
            Some(token) => {
                builder = builder.personal_token(token.expose_secret().to_string());
            }
            None => warn!("No GitHub token configured; sending unauthenticated requests"),
        }

        let octocrab = builder.build().map_err(|e| {
            SourceError::InvalidConfig(format!("Failed to build GitHub client: {e}"))
        })?;

        debug!("GitHub client ready for {}", config.api_url);

        Ok(Self {
            octocrab,
            per_page: config.per_page,
        })
    }

    async fn get_json<R>(&self, route: String, paged: bool) -> SourceResult<R>
    where
        R: DeserializeOwned,
    {
        let uri = match self.per_page {
            Some(per_page) if paged => format!("{route}?per_page={per_page}"),
            _ => route.clone(),
        };
        debug!("GET {uri}");

        let response = self
            .octocrab
            ._get(uri.as_str())
            .await
            .map_err(|e| SourceError::FetchError(format!("GET {route}: {e}")))?;
        let status = response.status();

        let body = self
            .octocrab
            .body_to_string(response)
            .await
            .map_err(|e| SourceError::FetchError(format!("GET {route}: {e}")))?;

        if !status.is_success() {
            return Err(SourceError::FetchError(format!(
                "GET {route}: {}",
                describe_failure(status, &body)
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| SourceError::DecodeError(format!("GET {route}: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Status line plus GitHub's `message`, when the body carries one
fn describe_failure(status: impl std::fmt::Display, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) if !error.message.is_empty() => format!("HTTP {status}: {}", error.message),
        _ => format!("HTTP {status}"),
    }
}

pub(crate) fn runs_route(repo: &RepoRef) -> String {
    format!("/repos/{}/{}/actions/runs", repo.owner, repo.name)
}

pub(crate) fn jobs_route(repo: &RepoRef, run_id: u64) -> String {
    format!("/repos/{}/{}/actions/runs/{run_id}/jobs", repo.owner, repo.name)
}

pub(crate) fn annotations_route(repo: &RepoRef, check_run_id: u64) -> String {
    format!(
        "/repos/{}/{}/check-runs/{check_run_id}/annotations",
        repo.owner, repo.name
    )
}

#[async_trait]
impl ActionsSource for GitHubClient {
    fn name(&self) -> &str {
        "github"
    }

    async fn fetch_runs(&self, repo: &RepoRef) -> SourceResult<WorkflowRunList> {
        let runs: WorkflowRunList = self.get_json(runs_route(repo), true).await?;
        debug!(
            "{repo}: {} runs returned (total_count={})",
            runs.workflow_runs.len(),
            runs.total_count
        );
        Ok(runs)
    }

    async fn fetch_jobs(&self, repo: &RepoRef, run: &WorkflowRun) -> SourceResult<JobList> {
        let jobs: JobList = self.get_json(jobs_route(repo, run.id), true).await?;
        debug!("{repo}: run {} has {} jobs", run.id, jobs.jobs.len());
        Ok(jobs)
    }

    async fn fetch_annotations(
        &self, repo: &RepoRef, job: &Job,
    ) -> SourceResult<Vec<Annotation>> {
        // A job's id is also the id of its check run
        let annotations: Vec<Annotation> =
            self.get_json(annotations_route(repo, job.id), false).await?;
        debug!(
            "{repo}: job {} has {} annotations",
            job.id,
            annotations.len()
        );
        Ok(annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        let repo = RepoRef::new("swfz", "gh-annotations");
        assert_eq!(runs_route(&repo), "/repos/swfz/gh-annotations/actions/runs");
        assert_eq!(
            jobs_route(&repo, 1001),
            "/repos/swfz/gh-annotations/actions/runs/1001/jobs"
        );
        assert_eq!(
            annotations_route(&repo, 10001),
            "/repos/swfz/gh-annotations/check-runs/10001/annotations"
        );
    }

    #[test]
    fn test_describe_failure() {
        assert_eq!(
            describe_failure(404, r#"{"message":"Not Found","documentation_url":"x"}"#),
            "HTTP 404: Not Found"
        );
        assert_eq!(describe_failure(502, "<html>Bad Gateway</html>"), "HTTP 502");
        assert_eq!(describe_failure(500, ""), "HTTP 500");
        assert_eq!(describe_failure(403, r#"{"message":""}"#), "HTTP 403");
    }

    #[test]
    fn test_routes_ignore_host() {
        let repo = RepoRef::new("team", "app").with_host("ghe.example.com");
        assert_eq!(runs_route(&repo), "/repos/team/app/actions/runs");
    }
}

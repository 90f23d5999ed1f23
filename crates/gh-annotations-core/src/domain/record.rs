use gh_annotations_api::{
    Annotation,
    Job,
    RepoRef,
    WorkflowRun,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::tree::RunNode;

/// One output row: a single annotation joined with its job, run and repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub repository: String,
    pub workflow_name: String,
    pub workflow_event: String,
    pub workflow_path: String,
    pub workflow_url: String,
    #[serde(rename = "workflow_run_started_at")]
    pub workflow_started_at: String,
    pub workflow_created_at: String,
    pub workflow_updated_at: String,
    pub job_name: String,
    pub job_conclusion: String,
    pub job_started_at: String,
    pub job_completed_at: String,
    pub annotation_level: String,
    pub message: String,
    pub annotation_path: String,
    pub annotation_title: String,
    pub start_line: u64,
    pub end_line: u64,
}

impl FlatRecord {
    pub fn from_parts(
        repo: &RepoRef, run: &WorkflowRun, job: &Job, annotation: &Annotation,
    ) -> Self {
        Self {
            repository: repo.full_name(),
            workflow_name: run.name.clone(),
            workflow_event: run.event.clone(),
            workflow_path: run.path.clone(),
            workflow_url: run.html_url.clone(),
            workflow_started_at: run.run_started_at.clone(),
            workflow_created_at: run.created_at.clone(),
            workflow_updated_at: run.updated_at.clone(),
            job_name: job.name.clone(),
            job_conclusion: job.conclusion.clone(),
            job_started_at: job.started_at.clone(),
            job_completed_at: job.completed_at.clone(),
            annotation_level: annotation.annotation_level.clone(),
            message: annotation.message.clone(),
            annotation_path: annotation.path.clone(),
            annotation_title: annotation.title.clone(),
            start_line: annotation.start_line,
            end_line: annotation.end_line,
        }
    }
}

/// Walks runs → jobs → annotations and emits one record per annotation.
/// Jobs without annotations and runs without jobs produce no rows.
pub fn flatten(repo: &RepoRef, runs: &[RunNode]) -> Vec<FlatRecord> {
    runs.iter()
        .flat_map(move |node| {
            node.jobs.iter().flat_map(move |job_node| {
                job_node.annotations.iter().map(move |annotation| {
                    FlatRecord::from_parts(repo, &node.run, &job_node.job, annotation)
                })
            })
        })
        .collect()
}

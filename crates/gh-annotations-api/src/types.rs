use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// GitHub reports unset text attributes as `null`; keep them textual.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// One execution of a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub workflow_id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub head_branch: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub event: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub run_started_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub jobs_url: String,
}

/// Body of `GET /repos/{owner}/{repo}/actions/runs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowRunList {
    #[serde(default)]
    pub total_count: u64,
    pub workflow_runs: Vec<WorkflowRun>,
}

/// A unit of work inside a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conclusion: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub started_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub completed_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub check_run_url: String,
}

/// Body of `GET /repos/{owner}/{repo}/actions/runs/{run_id}/jobs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub total_count: u64,
    pub jobs: Vec<Job>,
}

/// A diagnostic attached to a job's check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub blob_href: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub annotation_level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub raw_details: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub start_line: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub start_column: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub end_line: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub end_column: u64,
}

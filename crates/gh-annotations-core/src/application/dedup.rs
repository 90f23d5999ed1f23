use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{
    DateTime,
    Utc,
};
use gh_annotations_api::WorkflowRun;

/// Keeps the first run seen for each workflow.
///
/// "Latest" relies on the input already being newest-first, which is how the
/// runs endpoint orders its results. No timestamps are compared here.
pub fn latest_runs(runs: Vec<WorkflowRun>) -> Vec<WorkflowRun> {
    let mut seen = HashSet::new();
    runs.into_iter()
        .filter(|run| seen.insert(run.workflow_id))
        .collect()
}

/// Stable sort by `created_at`, newest first. Runs with an unparseable
/// timestamp go last, in their original order.
pub fn sort_newest_first(mut runs: Vec<WorkflowRun>) -> Vec<WorkflowRun> {
    runs.sort_by_key(|run| Reverse(created_at(run)));
    runs
}

fn created_at(run: &WorkflowRun) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&run.created_at)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

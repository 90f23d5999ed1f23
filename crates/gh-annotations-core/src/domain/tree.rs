use gh_annotations_api::{
    Annotation,
    Job,
    WorkflowRun,
};

/// A run together with everything fetched beneath it
#[derive(Debug, Clone)]
pub struct RunNode {
    pub run: WorkflowRun,
    pub jobs: Vec<JobNode>,
}

#[derive(Debug, Clone)]
pub struct JobNode {
    pub job: Job,
    pub annotations: Vec<Annotation>,
}

impl RunNode {
    pub fn annotation_count(&self) -> usize {
        self.jobs.iter().map(|j| j.annotations.len()).sum()
    }
}

//! Source contract for gh-annotations
//!
//! Holds the GitHub Actions data model (workflow runs, jobs, check run
//! annotations), the repository coordinate type and the [`ActionsSource`]
//! trait every backend implements. The aggregation core only depends on this
//! crate, so it can be driven by the real GitHub client or by an in-memory
//! source in tests.

pub mod error;
pub mod repo;
pub mod source;
pub mod types;

pub use error::{
    SourceError,
    SourceResult,
};
pub use repo::RepoRef;
pub use source::ActionsSource;
pub use types::{
    Annotation,
    Job,
    JobList,
    WorkflowRun,
    WorkflowRunList,
};

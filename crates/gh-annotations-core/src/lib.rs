pub mod application;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;

pub use application::{
    latest_runs,
    sort_newest_first,
    AggregateOptions,
    Aggregator,
};
pub use domain::{
    flatten,
    FlatRecord,
    JobNode,
    RunNode,
};
pub use error::{
    CoreError,
    CoreResult,
};
pub use output::{
    render,
    Destination,
    OutputFormat,
    TableStyle,
};

mod aggregator;
mod dedup;

pub use aggregator::{
    AggregateOptions,
    Aggregator,
    DEFAULT_MAX_CONCURRENCY,
};
pub use dedup::{
    latest_runs,
    sort_newest_first,
};

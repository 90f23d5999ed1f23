use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const DEFAULT_LOG_FILTER: &str =
    "gh_annotations=warn,gh_annotations_core=warn,gh_annotations_github=warn";

pub const VERBOSE_LOG_FILTER: &str =
    "gh_annotations=debug,gh_annotations_core=debug,gh_annotations_github=debug";

pub fn init() {
    init_with_default(DEFAULT_LOG_FILTER);
}

/// Installs the global subscriber; `RUST_LOG` wins over `default_filter`.
/// Output goes to stderr, stdout is reserved for rendered records.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();
}

pub fn init_verbose() {
    init_with_default(VERBOSE_LOG_FILTER);
}

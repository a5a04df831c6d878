//! Tracing/logging initialization.
//!
//! Events go to stderr so they never interleave with the menu and tables the
//! operator reads on stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Kept quiet so an interactive session
/// only shows warnings (e.g. a missing inventory file).
pub const DEFAULT_FILTER: &str = "warn";

/// Layout of emitted log lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line events.
    #[default]
    Text,
    /// One JSON object per event, with timestamps.
    Json,
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.compact().without_time().try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}

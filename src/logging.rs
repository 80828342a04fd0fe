use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "osm_cleaner.log";
const DEFAULT_FILTER: &str = "osm_cleaner=info,warn";

/// Daily-rotated JSON logs under `logs/`, human-readable logs on stderr.
///
/// stdout is left to command output, so `audit` can be piped straight to a file.
pub fn init_logging() {
    let _ = fs::create_dir_all(LOG_DIR);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    // flushes on drop, so it has to outlive main
    std::mem::forget(guard);
}

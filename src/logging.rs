use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FILTER_ENV: &str = "STUDY_BUDDY_LOG";
const DEFAULT_FILTER: &str = "study_buddy=info";

/// Send logs to a daily rolling file. The terminal belongs to the UI, so
/// there is no console layer. Keep the guard alive until exit.
pub fn init() -> color_eyre::Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, "study-buddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_line_number(true)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("study-buddy")
        .join("logs")
}

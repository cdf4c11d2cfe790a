use anyhow::{anyhow, Result};
use tracing::error;
use tracing_subscriber::fmt::time::OffsetTime;

/// Installs a `tracing` subscriber writing to stdout with UTC wall-clock timestamps.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

pub fn log_error(e: &anyhow::Error) {
    error!("{}", e);
    e.chain()
        .skip(1)
        .for_each(|cause| error!("caused by: {}", cause));
}

pub fn log_and_ok<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log_error(&e);
            None
        }
    }
}

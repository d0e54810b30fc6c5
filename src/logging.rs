use crate::persistence::{ensure_dir, ConfigLocations};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name inside the log directory
pub const LOG_FILE: &str = "todo-app.log";

/// Send tracing output to a file in the user config dir. The terminal is in
/// raw mode on the alternate screen, so nothing may go to stderr.
///
/// Returns `None` (logging disabled) when there is no usable log directory.
/// The guard must stay alive for buffered lines to be flushed.
pub fn init_logging(locations: &ConfigLocations) -> Option<WorkerGuard> {
    let log_dir = locations.log_dir()?;
    ensure_dir(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .ok()?;

    Some(guard)
}

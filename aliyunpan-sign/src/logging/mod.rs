//! Console and file logging.
//!
//! The console shows `info` and above (overridable through `RUST_LOG`); the
//! log file receives `debug` output of this workspace's crates, appended
//! across runs.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Default console filter directive.
pub const DEFAULT_CONSOLE_FILTER: &str = "aliyunpan_sign=info,aliyunpan_api=info,warn";

/// Filter directive for the log file.
pub const FILE_FILTER: &str = "aliyunpan_sign=debug,aliyunpan_api=debug,info";

/// Timer that formats timestamps in the local timezone.
#[derive(Debug, Clone, Copy)]
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Create the log directory if needed and return the log file path.
pub fn prepare_log_file(log_dir: &Path, file_name: &str) -> crate::Result<PathBuf> {
    std::fs::create_dir_all(log_dir)?;
    Ok(log_dir.join(file_name))
}

/// Initialize the global subscriber.
///
/// Keep the returned guard alive until the process exits, otherwise buffered
/// file output is lost.
pub fn init_logging(log_dir: &Path, file_name: &str) -> crate::Result<WorkerGuard> {
    prepare_log_file(log_dir, file_name)?;

    // `never` opens the file in append mode and does not rotate.
    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_timer(LocalTimer)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_timer(LocalTimer)
                .with_filter(EnvFilter::new(FILE_FILTER)),
        )
        .try_init()
        .map_err(|e| crate::Error::Other(format!("Failed to set global default subscriber: {e}")))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        assert!(DEFAULT_CONSOLE_FILTER.contains("aliyunpan_sign=info"));
        assert!(FILE_FILTER.contains("aliyunpan_sign=debug"));
        assert!(EnvFilter::try_new(DEFAULT_CONSOLE_FILTER).is_ok());
        assert!(EnvFilter::try_new(FILE_FILTER).is_ok());
    }

    #[test]
    fn test_prepare_log_file_creates_dir() {
        let temp = tempfile::tempdir().unwrap();
        let log_dir = temp.path().join("nested").join("logs");

        let path = prepare_log_file(&log_dir, "aliyunpan.log").unwrap();

        assert!(log_dir.is_dir());
        assert_eq!(path, log_dir.join("aliyunpan.log"));
    }
}

//! Subscriber setup: pretty console output in dev, JSON in production, optional daily file.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "inventory_api=info,inventory_server=info";
const LOG_FILE_PREFIX: &str = "inventory-server";

/// Install the global subscriber. Keep the returned guard alive for the life of the
/// process or buffered file output is lost.
pub fn init(
    dev: bool,
    log_dir: Option<&Path>,
    max_files: usize,
) -> Result<Option<WorkerGuard>, InitError> {
    let console = if dev {
        fmt::layer()
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer().json().with_current_span(false).boxed()
    };

    let (file, guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(dir, max_files)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .init();
    Ok(guard)
}

/// Daily files named `inventory-server.YYYY-MM-DD` in `dir`, created if missing. Only the
/// newest `max_files` survive a rotation.
fn file_appender(dir: &Path, max_files: usize) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .max_log_files(max_files)
        .build(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_appender_writes_prefixed_daily_file() {
        let dir = std::env::temp_dir().join(format!("inventory-logs-{}", std::process::id()));
        let mut appender = file_appender(&dir, 3).unwrap();
        writeln!(appender, "started").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("inventory-server."), "got {}", names[0]);
    }
}

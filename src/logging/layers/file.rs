use crate::logging::config::LoggingConfig;
use crate::Result;
use anyhow::Context;
use std::fs::{create_dir_all, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{self as tracing_fmt, format, writer::BoxMakeWriter};
use tracing_subscriber::registry::LookupSpan;

const LOG_FILE_NAME: &str = "workflow-inspect.log";
const DEFAULT_LOG_DIR: &str = ".workflow-inspect/logs";

/// Layer type produced by the file sink builder.
pub type FileFmtLayer<S> =
    tracing_fmt::Layer<S, format::DefaultFields, format::Format<format::Full>, BoxMakeWriter>;

/// Layer stack that already wraps the provided subscriber. `None` when the file sink is off.
pub type FileLayerStack<S> = tracing_subscriber::layer::Layered<Option<FileFmtLayer<S>>, S>;

/// Log file location, or `None` when file logging is disabled.
///
/// Relative directories resolve against `workspace_root`.
pub fn log_file_path(config: &LoggingConfig, workspace_root: &Path) -> Option<PathBuf> {
    if !config.enable_file {
        return None;
    }
    let directory = match &config.log_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => workspace_root.join(dir),
        None => workspace_root.join(DEFAULT_LOG_DIR),
    };
    Some(directory.join(LOG_FILE_NAME))
}

/// Build a tracing layer that appends to `log_file` via a non-blocking writer.
pub fn file_layer<S>(log_file: Option<&Path>) -> Result<(Option<FileFmtLayer<S>>, Option<WorkerGuard>)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let Some(log_file) = log_file else {
        return Ok((None, None));
    };

    if let Some(parent) = log_file.parent() {
        create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let writer = BoxMakeWriter::new(non_blocking);
    let layer = tracing_fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);
    Ok((Some(layer), Some(guard)))
}

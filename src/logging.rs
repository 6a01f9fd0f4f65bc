use crate::config::Config;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keep guards alive for the lifetime of the app.
pub struct LogGuards {
    _file_guard: Option<WorkerGuard>,
}

fn split_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let file = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("cocktails.log"))
        .to_string_lossy()
        .to_string();
    (dir, file)
}

/// Stderr layer always; file layer when `log_file` is set. Stdout is left
/// to command output.
pub fn init_logging(config: &Config) -> LogGuards {
    let filter = EnvFilter::new(config.log_filter());

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .compact()
        .with_writer(std::io::stderr)
        // requires tracing-subscriber "chrono" feature
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S".to_string(),
        ));

    let (file_layer, guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (dir, file) = split_path(path);
            let appender = tracing_appender::rolling::never(dir, file);
            let (nb, guard) = tracing_appender::non_blocking(appender);

            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .compact()
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S".to_string(),
                ))
                .with_writer(nb);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Option<Layer> is itself a layer
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    LogGuards { _file_guard: guard }
}

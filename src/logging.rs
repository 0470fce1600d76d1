use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("postboard={level}")
}

/// Initialize the logging system
///
/// Logs go to stderr in compact form. With `log_file` set, a second layer
/// writes JSON lines to a daily-rotated file next to it; keep the returned
/// guard alive for as long as that file should receive records.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        let _ = subscriber.try_init();
        return None;
    };

    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(dir);
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("postboard.log"));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        dir, file_name,
    ));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();

    let _ = subscriber.with(file_layer).try_init();
    Some(guard)
}

use crate::cli::Args;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits the configured log file path into directory and file name,
/// falling back to the default log directory.
fn resolve_log_location(log_file_path: Option<&str>) -> (String, String) {
    let default_file_name = format!("{APP_NAME}.log");
    match log_file_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .unwrap_or(default_file_name);
            (parent.to_string_lossy().to_string(), file_name)
        }
        None => (Config::get_log_dir_path(), default_file_name),
    }
}

/// `RUST_LOG` when it is set, otherwise `atg_startlista={level}`.
fn env_filter(level: &str) -> Result<EnvFilter, AppError> {
    build_env_filter(level, std::env::var(EnvFilter::DEFAULT_ENV).ok())
}

fn build_env_filter(level: &str, rust_log: Option<String>) -> Result<EnvFilter, AppError> {
    let directives = match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => format!("{APP_NAME}={level}"),
    };
    EnvFilter::try_new(&directives)
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive '{directives}': {e}")))
}

/// Sets up logging to stdout and to a daily rolling log file.
///
/// - Progress is logged at info level; `--debug` lowers it to debug
/// - A non-empty `RUST_LOG` replaces both levels
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(config.log_file_path.as_deref());

    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if args.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_target(false)
                .with_filter(env_filter(level)?),
        )
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter(level)?),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

//! Log setup for the simulator binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform cache directory for logs, `/tmp/sorc-sim/logs` as a fallback.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "sorc-sim")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/sorc-sim"))
        .join("logs")
}

/// Logs to stderr and to `<log_dir>/<session>/simulator.log`.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the whole run.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = match session_id {
        Some(id) => id.to_owned(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        }
    };

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "simulator.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/simulator.log", session_log_dir.display());

    Ok(guard)
}

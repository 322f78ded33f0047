//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "CLIQUE_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/clique/logs/` so they never
/// interleave with the terminal UI.
/// Log level is controlled by `CLIQUE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CLIQUE_LOG=debug cargo run
/// CLIQUE_LOG=clique_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "clique.log");

    // Default to info for our crates, allow override via CLIQUE_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("clique=info,clique_app=info,clique_client=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Clique starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("clique").join("logs"))
}

/// Get the log file path for the current day
///
/// The daily appender suffixes the prefix with the UTC date.
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(log_file_name(chrono::Utc::now().date_naive())))
}

fn log_file_name(day: chrono::NaiveDate) -> String {
    format!("clique.log.{}", day.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_clique_logs() {
        let path = get_current_log_file().unwrap();
        assert!(path.parent().unwrap().ends_with("clique/logs"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("clique.log."));
    }

    #[test]
    fn test_log_file_name_matches_daily_rotation() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
        assert_eq!(log_file_name(day), "clique.log.2024-11-02");
    }
}

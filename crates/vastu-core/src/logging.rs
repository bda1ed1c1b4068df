//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "VASTU_LOG";

const LOG_FILE_NAME: &str = "vastu.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/vastu-desk/logs/` so they never
/// interleave with the terminal UI. Log level is controlled by the
/// `VASTU_LOG` environment variable.
///
/// # Examples
/// ```bash
/// VASTU_LOG=debug vastu
/// VASTU_LOG=vastu_backend=trace vastu slots
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("vastu_desk=info,vastu_app=info,vastu_backend=info,vastu_tui=info,warn")
    });

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

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Vastu Desk starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("vastu-desk").join("logs")
}

/// Path of the log file (today's file carries a date suffix from the appender)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_directory() {
        let path = get_current_log_file();
        assert!(path.ends_with("vastu-desk/logs/vastu.log"));
    }
}

//! Logging setup for the whole process.

use std::fs;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub log_level: Level,
    pub enable_file_logging: bool,
    pub log_directory: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: false,
            log_directory: "logs".to_string(),
        }
    }
}

impl DebugConfig {
    /// File logging with daily rotation, for running as a service.
    pub fn production() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: true,
            log_directory: "/var/log/rrb-server".to_string(),
        }
    }

    pub fn test() -> Self {
        Self {
            log_level: Level::WARN,
            enable_file_logging: false,
            log_directory: "test_logs".to_string(),
        }
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the configured
/// level when set.
pub fn init_logging(config: &DebugConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.enable_file_logging {
        fs::create_dir_all(&config.log_directory)?;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("rrb_server={}", config.log_level)))?;

    if config.enable_file_logging {
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_directory, "rrb-server.log");

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }

    info!("Logging initialized");
    debug!("Debug config: {:?}", config);

    Ok(())
}

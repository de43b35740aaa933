//! Application Configuration
//!
//! Resolves where local storage and logs live.

use std::path::{Path, PathBuf};

use rolling_logger::LoggerOptions;

pub const APP_NAME: &str = "tent-checklist";
const DB_FILE: &str = "tent_checklist.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Keep everything in memory; nothing is written to disk
    pub ephemeral: bool,
    pub log_filter: String,
    /// Mirror log output to stderr
    pub verbose: bool,
}

impl AppConfig {
    pub fn new(
        data_dir: Option<PathBuf>,
        ephemeral: bool,
        log_filter: String,
        verbose: bool,
    ) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            ephemeral,
            log_filter,
            verbose,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Disk runs log to file and mirror to stderr on `-v`. Ephemeral runs
    /// only have stderr, so warnings always reach it and `-v` widens the
    /// filter to the configured one.
    pub fn logger_options(&self) -> LoggerOptions {
        let filter = if self.ephemeral && !self.verbose {
            "warn".to_string()
        } else {
            self.log_filter.clone()
        };
        LoggerOptions {
            filter,
            stderr: self.ephemeral || self.verbose,
            ..Default::default()
        }
    }

    pub fn ensure_data_dir(&self) -> std::io::Result<&Path> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(&self.data_dir)
    }
}

/// Platform data dir, or a dot-directory under the working dir
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_NAME)))
}

//! Logging setup.
//!
//! All code logs through the `log` macros. [`setup_logging`] installs a `fern`
//! dispatcher that always feeds the in-memory [`Logger`] (shown by the logs
//! overlay) and, when enabled in the configuration, a log file.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Upper bound on retained in-memory entries
const MAX_ENTRIES: usize = 1000;

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone, Default)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log entry, stamping it with the current time
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        self.push(format!("[{}] {}", timestamp, message));
    }

    /// Add an already formatted entry
    fn push(&self, entry: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_ENTRIES {
                logs.remove(0);
            }
            logs.push(entry);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
    }
}

/// Build the `fern` dispatcher for `config`, feeding `logger` and optionally a file.
pub fn build_dispatch(config: &LoggingConfig, logger: &Logger) -> Result<fern::Dispatch> {
    let memory = logger.clone();
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter()?)
        .chain(fern::Output::call(move |record| memory.push(record.args().to_string())));

    if config.enabled {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger. Can only succeed once per process.
pub fn setup_logging(config: &LoggingConfig, logger: &Logger) -> Result<()> {
    build_dispatch(config, logger)?
        .apply()
        .context("Failed to install global logger")?;
    log::info!("Logging initialized (file logging: {})", config.enabled);
    Ok(())
}

//! jeffm Logging System
//!
//! One log file per invocation under `<home>/jeffm/logs/`, opened with a
//! short session header. Until `init_logger` runs (the binary does this at
//! startup) every logging call is a no-op, so library users and tests never
//! touch the filesystem through here.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

static LOGGER: OnceLock<Mutex<JeffLogger>> = OnceLock::new();

// ============================================================================
// Session Header
// ============================================================================

#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub app_version: String,
    pub os: String,
    pub arch: String,
    pub args: String,
}

impl SessionInfo {
    pub fn detect() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            args: std::env::args().skip(1).collect::<Vec<_>>().join(" "),
        }
    }

    pub fn to_log_header(&self) -> String {
        format!(
r#"================================================================================
jeffm Log - {}
================================================================================
Application:   jeffm v{}
Platform:      {} ({})
Arguments:     {}
================================================================================"#,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.app_version,
            self.os,
            self.arch,
            self.args
        )
    }
}

// ============================================================================
// Log Levels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info,
    Action, // User-requested operations
    Install,
    Warning,
    Error,
}

impl LogLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Action => "[ACTION]",
            LogLevel::Install => "[INSTALL]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Error => "[ERROR]",
        }
    }
}

// ============================================================================
// jeffm Logger
// ============================================================================

pub struct JeffLogger {
    log_file: Option<File>,
    echo: bool,
}

impl JeffLogger {
    /// Open a fresh log file in `log_dir`; `echo` mirrors every line to stderr
    pub fn new(log_dir: &Path, echo: bool) -> Self {
        let _ = fs::create_dir_all(log_dir);

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("jeffm_{}.log", timestamp));

        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .ok();

        let mut logger = Self { log_file, echo };
        logger.write_raw(&SessionInfo::detect().to_log_header());
        logger
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.log_file {
            let _ = writeln!(file, "{}", msg);
            let _ = file.flush();
        }

        if self.echo {
            eprintln!("{}", msg);
        }
    }

    pub fn log(&mut self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);
        self.write_raw(&formatted);
    }
}

// ============================================================================
// Global Logger Access
// ============================================================================

/// Initialize the global logger (call once at startup)
pub fn init_logger(log_dir: &Path, echo: bool) {
    LOGGER.get_or_init(|| Mutex::new(JeffLogger::new(log_dir, echo)));
}

fn log(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.lock().log(level, message);
    }
}

// ============================================================================
// Convenience Logging Functions
// ============================================================================

pub fn log_info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn log_action(message: &str) {
    log(LogLevel::Action, message);
}

pub fn log_install(message: &str) {
    log(LogLevel::Install, message);
}

pub fn log_warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log(LogLevel::Error, message);
}

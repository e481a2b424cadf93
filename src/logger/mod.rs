//! Leveled logging for scan runs.
//!
//! Log lines are formatted as `[SEVERITY] [YYYY/MM/DD HH:mm:ss] message` and
//! go either to standard output or to an append-only file. Logging is
//! best-effort: a failed write never aborts a scan, which is why the writing
//! methods return nothing.
//!
//! # Example
//!
//! ```
//! use reactscope::logger::{Logger, LogLevel};
//!
//! let logger = Logger::new(LogLevel::Info);
//! logger.info("Parsing package.json");
//! logger.debug("this is filtered out at Info level");
//! ```

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Minimum severity a message must have to be written.
///
/// Ordering matters: `Debug < Info < Warn < Error < Disabled`. A logger at
/// level `Warn` writes warnings and errors only; `Disabled` writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Disabled,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "disabled" => Ok(LogLevel::Disabled),
            _ => Err(format!(
                "Unknown log level: '{}'. Valid levels: debug, info, warn, error, disabled",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Disabled => "disabled",
        };
        write!(f, "{}", s)
    }
}

/// Where log lines end up.
enum Destination {
    Stdout,
    // Mutex keeps concurrent project tasks from interleaving within a line.
    File(Mutex<File>),
}

/// A leveled, destination-aware logger shared across project tasks.
pub struct Logger {
    level: LogLevel,
    destination: Destination,
}

impl Logger {
    /// Creates a logger that writes to standard output.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            destination: Destination::Stdout,
        }
    }

    /// Creates a logger that appends to the file at `path`, creating it if
    /// it does not exist.
    pub fn with_file(level: LogLevel, path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            destination: Destination::File(Mutex::new(file)),
        })
    }

    /// Logs a message at ERROR severity.
    pub fn error(&self, message: &str) {
        if self.level <= LogLevel::Error {
            self.write_line("ERROR", message);
        }
    }

    /// Logs a message at WARNING severity.
    pub fn warn(&self, message: &str) {
        if self.level <= LogLevel::Warn {
            self.write_line("WARNING", message);
        }
    }

    /// Logs a message at INFO severity.
    pub fn info(&self, message: &str) {
        if self.level <= LogLevel::Info {
            self.write_line("INFO", message);
        }
    }

    /// Logs a message at DEBUG severity.
    pub fn debug(&self, message: &str) {
        if self.level <= LogLevel::Debug {
            self.write_line("DEBUG", message);
        }
    }

    fn write_line(&self, severity: &str, message: &str) {
        let line = format_line(severity, message);
        match &self.destination {
            Destination::Stdout => println!("{}", line),
            Destination::File(file) => {
                // Best-effort: a poisoned lock or a failed write is dropped.
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", line);
                }
            }
        }
    }
}

fn format_line(severity: &str, message: &str) -> String {
    let timestamp = Local::now().format("%Y/%m/%d %H:%M:%S");
    format!("[{}] [{}] {}", severity, timestamp, message)
}

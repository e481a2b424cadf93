//! Subprocess-backed scanner implementation.
//!
//! Treats the real source-code scanner as an opaque executable: the command
//! is invoked with the crawl directory as its final argument, runs with the
//! project root as its working directory, and must print the raw usage
//! report as JSON on stdout.

use async_trait::async_trait;
use tokio::process::Command;

use super::types::{RawReport, ScanTarget};
use super::{Scanner, ScannerError};

/// Runs an external scanner executable and parses its stdout.
///
/// # Example
///
/// ```ignore
/// use reactscope::scanner::CommandScanner;
///
/// // any executable that prints a raw usage report as JSON works here
/// let scanner = CommandScanner::new("react-scanner").arg("--processor=raw-report");
/// ```
#[derive(Debug, Clone)]
pub struct CommandScanner {
    program: String,
    args: Vec<String>,
}

impl CommandScanner {
    /// Creates a scanner invoking `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends an extra argument placed before the crawl directory.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

#[async_trait]
impl Scanner for CommandScanner {
    async fn scan(&self, target: &ScanTarget) -> Result<RawReport, ScannerError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&target.crawl_from)
            .current_dir(&target.root_dir)
            .output()
            .await
            .map_err(|source| ScannerError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScannerError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(ScannerError::Report)
    }
}

//! Multi-project scan orchestration.

use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::aggregate::{aggregate_usage, LibraryReport};
use crate::logger::{LogLevel, Logger};
use crate::parser::{resolve_dependencies, ManifestError, ProjectRequest};
use crate::scanner::{ScanTarget, Scanner, ScannerError};

/// Errors that can abort a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The batch contained no project requests.
    #[error("Batch contains no project requests")]
    EmptyBatch,

    /// Two requests in the batch shared a project name.
    #[error("Duplicate project name in batch: '{0}'")]
    DuplicateProjectName(String),

    /// The log destination file could not be opened.
    #[error("Failed to open log destination '{path}': {source}")]
    LogDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dependency resolution failed for a project.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// The external scanner failed for a project.
    #[error(transparent)]
    Scanner(#[from] ScannerError),

    /// The batch report could not be written to disk. The scan itself
    /// completed; only persistence failed.
    #[error("Failed to write report to '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A project task panicked or was cancelled.
    #[error("Project scan task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Shared options for one batch invocation.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Minimum severity written to the log. Defaults to INFO.
    pub log_level: LogLevel,

    /// Append log lines to this file instead of standard output.
    pub log_destination: Option<PathBuf>,

    /// Write the batch report as pretty JSON to this path, overwriting.
    pub output_destination: Option<PathBuf>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_destination: None,
            output_destination: None,
        }
    }
}

/// A full batch request as read from a JSON config file.
///
/// # Example
///
/// ```
/// use reactscope::batch::BatchConfig;
///
/// let json = r#"{
///     "projects": [
///         {"rootPath": "/srv/app", "projectName": "app"}
///     ],
///     "logLevel": "DEBUG",
///     "outputDestination": "/tmp/report.json"
/// }"#;
/// let config: BatchConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.projects.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    pub projects: Vec<ProjectRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_destination: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_destination: Option<PathBuf>,
}

impl BatchConfig {
    /// Splits the config into the request list and shared options.
    pub fn into_parts(self) -> (Vec<ProjectRequest>, BatchOptions) {
        let options = BatchOptions {
            log_level: self.log_level.unwrap_or(LogLevel::Info),
            log_destination: self.log_destination,
            output_destination: self.output_destination,
        };
        (self.projects, options)
    }
}

/// The result of scanning one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub project_name: String,

    /// Wall-clock milliseconds when this project's scan began.
    pub started_at: i64,

    /// Wall-clock milliseconds when this project's scan finished.
    pub completed_at: i64,

    pub results: Vec<LibraryReport>,
}

fn validate(requests: &[ProjectRequest]) -> Result<(), BatchError> {
    if requests.is_empty() {
        return Err(BatchError::EmptyBatch);
    }
    let mut seen = HashSet::new();
    for request in requests {
        if !seen.insert(request.project_name.as_str()) {
            return Err(BatchError::DuplicateProjectName(
                request.project_name.clone(),
            ));
        }
    }
    Ok(())
}

/// Scans a single project: resolve dependencies, invoke the scanner,
/// aggregate, and bracket the work with timestamps.
pub async fn scan_project(
    scanner: &dyn Scanner,
    request: &ProjectRequest,
    logger: &Logger,
) -> Result<ProjectReport, BatchError> {
    let started_at = Utc::now().timestamp_millis();

    let tracked = resolve_dependencies(request, logger)?;

    let target = ScanTarget {
        crawl_from: request.src_dir(),
        root_dir: request.root_path.clone(),
    };
    let raw = scanner.scan(&target).await?;

    logger.info(&format!(
        "Formatting scan results for \"{}\"",
        request.project_name
    ));
    let results = aggregate_usage(&raw, &tracked);

    let completed_at = Utc::now().timestamp_millis();
    logger.info(&format!(
        "Completed the scan for \"{}\"",
        request.project_name
    ));

    Ok(ProjectReport {
        project_name: request.project_name.clone(),
        started_at,
        completed_at,
        results,
    })
}

/// Runs a batch of project scans concurrently and collects their reports.
///
/// Validation happens before any work starts: an empty batch or a duplicate
/// project name fails the whole invocation with no side effects. Each
/// project then runs as its own task; reports are collected in completion
/// order. The first failing project aborts the batch — in-flight siblings
/// are not cancelled, but their results are discarded.
///
/// When an output destination is configured the full report is also written
/// to disk as pretty-printed JSON; a failed write surfaces as
/// [`BatchError::OutputWrite`] after the scan work is already done.
pub async fn run_batch(
    scanner: Arc<dyn Scanner>,
    requests: Vec<ProjectRequest>,
    options: &BatchOptions,
) -> Result<Vec<ProjectReport>, BatchError> {
    validate(&requests)?;

    let logger = match &options.log_destination {
        Some(path) => Arc::new(Logger::with_file(options.log_level, path).map_err(|source| {
            BatchError::LogDestination {
                path: path.clone(),
                source,
            }
        })?),
        None => Arc::new(Logger::new(options.log_level)),
    };

    let mut tasks = FuturesUnordered::new();
    let count = requests.len();
    for request in requests {
        let scanner = Arc::clone(&scanner);
        let logger = Arc::clone(&logger);
        tasks.push(tokio::spawn(async move {
            scan_project(scanner.as_ref(), &request, &logger).await
        }));
    }

    // completion order, not input order
    let mut reports = Vec::with_capacity(count);
    while let Some(joined) = tasks.next().await {
        reports.push(joined??);
    }

    if let Some(path) = &options.output_destination {
        logger.info(&format!(
            "Writing the results into \"{}\"",
            path.display()
        ));
        write_report(path, &reports).await?;
    }

    Ok(reports)
}

/// Serializes a batch report as pretty JSON and writes it to `path`,
/// overwriting any existing file.
pub async fn write_report(path: &Path, reports: &[ProjectReport]) -> Result<(), BatchError> {
    let json = serde_json::to_string_pretty(reports).map_err(|e| BatchError::OutputWrite {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| BatchError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
}

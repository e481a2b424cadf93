//! The external source scanner, modeled as a narrow seam.
//!
//! This crate never parses source code itself. Discovery of component
//! usages is delegated to an external tool behind the [`Scanner`] trait,
//! which takes a crawl target and returns the raw usage report defined in
//! [`types`]. Keeping the seam this small lets the aggregation core be
//! exercised with synthetic reports in tests.

pub mod command;
pub mod types;

use async_trait::async_trait;

// Re-export commonly used types for convenience
pub use command::CommandScanner;
pub use types::{ComponentUsage, ImportInfo, RawInstance, RawReport, ScanTarget};

/// Errors surfaced from the external scanner.
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    /// The scanner executable could not be started.
    #[error("Failed to launch scanner '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The scanner ran but exited unsuccessfully.
    #[error("Scanner '{program}' exited with code {code:?}: {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The scanner's output was not a valid raw usage report.
    #[error("Failed to parse scanner report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Discovers component usages under a crawl target.
///
/// Implementations are invoked once per project by the batch orchestrator.
/// The trait is dyn-compatible so callers can swap the real subprocess
/// scanner for a synthetic one in tests.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Crawls `target` and returns the raw usage report.
    async fn scan(&self, target: &ScanTarget) -> Result<RawReport, ScannerError>;
}

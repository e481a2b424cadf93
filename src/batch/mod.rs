//! Batch orchestration of multi-project scans.
//!
//! Validates a batch of [`ProjectRequest`](crate::parser::ProjectRequest)s
//! up front (non-empty, unique project names), fans the projects out as
//! independent tokio tasks, and collects one [`ProjectReport`] per project
//! in completion order. Each task resolves its own dependency set, invokes
//! the external scanner, and aggregates — there is no shared mutable state
//! between projects.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use reactscope::batch::{run_batch, BatchOptions};
//! use reactscope::parser::ProjectRequest;
//! use reactscope::scanner::{CommandScanner, Scanner};
//!
//! let scanner: Arc<dyn Scanner> = Arc::new(CommandScanner::new("react-scanner"));
//! let requests = vec![ProjectRequest::from_root("/srv/app", "app")];
//! let reports = run_batch(scanner, requests, &BatchOptions::default()).await?;
//! ```

mod orchestrator;

pub use orchestrator::{
    run_batch, scan_project, write_report, BatchConfig, BatchError, BatchOptions, ProjectReport,
};

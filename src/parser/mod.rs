//! Manifest parsing and dependency resolution.
//!
//! This module turns a project scan request into the ordered set of tracked
//! package names used to attribute component usages. The list comes either
//! verbatim from the request or from the `dependencies`/`devDependencies`
//! maps of a package.json on disk.
//!
//! # Example
//!
//! ```ignore
//! use reactscope::logger::{Logger, LogLevel};
//! use reactscope::parser::{resolve_dependencies, ProjectRequest};
//!
//! let request = ProjectRequest::from_root("/srv/app", "app");
//! let logger = Logger::new(LogLevel::Info);
//! let tracked = resolve_dependencies(&request, &logger)?;
//! println!("Tracking {} packages", tracked.len());
//! ```

pub mod package_json;
pub mod types;

// Re-export commonly used types for convenience
pub use package_json::{
    parse_file, parse_str, resolve_dependencies, tracked_dependencies, ManifestError,
    ManifestResult,
};

pub use types::{DependencySource, PackageJson, ProjectRequest};

//! Shared types for manifest parsing and scan requests.
//!
//! This module defines the package.json manifest model and the per-project
//! scan request consumed by the batch orchestrator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Represents the structure of a package.json file.
///
/// Only the fields relevant to dependency tracking are modeled; everything
/// else in the manifest is ignored during deserialization.
///
/// # Example
///
/// ```
/// use reactscope::parser::types::PackageJson;
///
/// let json = r#"{"name": "my-app", "dependencies": {"react": "^18.0.0"}}"#;
/// let pkg: PackageJson = serde_json::from_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageJson {
    /// The name of the package.
    pub name: Option<String>,

    /// The version of the package (semver format).
    pub version: Option<String>,

    /// Production dependencies required at runtime.
    pub dependencies: Option<HashMap<String, String>>,

    /// Development-only dependencies (testing, building, etc.).
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Option<HashMap<String, String>>,
}

impl PackageJson {
    /// Returns true if the package has any dependencies defined.
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|d| !d.is_empty())
            || self
                .dev_dependencies
                .as_ref()
                .is_some_and(|d| !d.is_empty())
    }

    /// Returns the total count of runtime and development dependencies.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |d| d.len())
            + self.dev_dependencies.as_ref().map_or(0, |d| d.len())
    }
}

/// Where the tracked dependency set for a project comes from.
///
/// The two variants are mutually exclusive in a request: either the caller
/// already knows the packages to track, or they are derived from a manifest
/// on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencySource {
    /// An explicit list of package names, used verbatim.
    Known { dependencies: Vec<String> },

    /// Derive the list from a package.json. When no path is given it
    /// defaults to `{rootPath}/package.json`.
    Manifest {
        #[serde(
            rename = "packageJsonPath",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        package_json_path: Option<PathBuf>,
    },
}

/// One project entry in a batch scan request.
///
/// # Example
///
/// ```
/// use reactscope::parser::types::ProjectRequest;
///
/// let json = r#"{
///     "rootPath": "/srv/app",
///     "projectName": "app",
///     "dependencies": ["react", "ui-lib"]
/// }"#;
/// let request: ProjectRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.project_name, "app");
/// assert_eq!(request.src_dir(), std::path::PathBuf::from("/srv/app/src"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    /// Filesystem root of the project. `srcPath` and `packageJsonPath`
    /// default relative to this.
    pub root_path: PathBuf,

    /// Directory to crawl. Defaults to `{rootPath}/src`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_path: Option<PathBuf>,

    /// Unique identifier for this project within a batch.
    pub project_name: String,

    /// Explicit dependency list or manifest location.
    #[serde(flatten)]
    pub dependency_source: DependencySource,
}

impl ProjectRequest {
    /// The directory the external scanner should crawl.
    pub fn src_dir(&self) -> PathBuf {
        self.src_path
            .clone()
            .unwrap_or_else(|| self.root_path.join("src"))
    }

    /// The manifest location for manifest-backed requests.
    ///
    /// Returns `None` when the request carries an explicit dependency list.
    pub fn manifest_path(&self) -> Option<PathBuf> {
        match &self.dependency_source {
            DependencySource::Known { .. } => None,
            DependencySource::Manifest { package_json_path } => Some(
                package_json_path
                    .clone()
                    .unwrap_or_else(|| self.root_path.join("package.json")),
            ),
        }
    }

    /// Convenience constructor for a manifest-backed request with defaults.
    pub fn from_root(root_path: impl Into<PathBuf>, project_name: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            src_path: None,
            project_name: project_name.into(),
            dependency_source: DependencySource::Manifest {
                package_json_path: None,
            },
        }
    }

    /// Convenience constructor for a request with a known dependency list.
    pub fn with_dependencies(
        root_path: impl Into<PathBuf>,
        project_name: impl Into<String>,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            src_path: None,
            project_name: project_name.into(),
            dependency_source: DependencySource::Known { dependencies },
        }
    }

    /// Overrides the crawl directory.
    pub fn with_src_path(mut self, src_path: impl AsRef<Path>) -> Self {
        self.src_path = Some(src_path.as_ref().to_path_buf());
        self
    }
}

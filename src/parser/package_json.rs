//! Parser for npm package.json files and dependency resolution.
//!
//! This module reads a project's manifest and produces the set of package
//! names considered "tracked" for that project, which the aggregator later
//! uses to attribute component usages to libraries.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::types::{DependencySource, PackageJson, ProjectRequest};
use crate::logger::Logger;

/// Errors that can occur while resolving a project's tracked dependencies.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Failed to read the manifest file from disk.
    #[error("Failed to read package.json: {0}")]
    Read(#[from] std::io::Error),

    /// The manifest content is not valid JSON.
    #[error("Failed to parse package.json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Parses a package.json file from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use reactscope::parser::package_json::parse_file;
///
/// let pkg = parse_file(Path::new("package.json")).unwrap();
/// println!("Package: {:?}", pkg.name);
/// ```
pub fn parse_file(path: &Path) -> ManifestResult<PackageJson> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a package.json from a string.
///
/// # Example
///
/// ```
/// use reactscope::parser::package_json::parse_str;
///
/// let json = r#"{"name": "my-app", "version": "1.0.0"}"#;
/// let pkg = parse_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// ```
pub fn parse_str(content: &str) -> ManifestResult<PackageJson> {
    let pkg: PackageJson = serde_json::from_str(content)?;
    Ok(pkg)
}

/// Extracts the tracked dependency set from a parsed manifest.
///
/// The result is the union of the `dependencies` and `devDependencies` keys
/// (absent maps treated as empty), de-duplicated and sorted
/// lexicographically for determinism.
pub fn tracked_dependencies(pkg: &PackageJson) -> Vec<String> {
    let mut names = BTreeSet::new();
    if let Some(ref dependencies) = pkg.dependencies {
        names.extend(dependencies.keys().cloned());
    }
    if let Some(ref dev_dependencies) = pkg.dev_dependencies {
        names.extend(dev_dependencies.keys().cloned());
    }
    names.into_iter().collect()
}

/// Resolves the tracked dependency set for a scan request.
///
/// Requests carrying an explicit list use it verbatim, in caller order.
/// Manifest-backed requests read and parse the package.json, failing with
/// [`ManifestError::Read`] when the file is missing or unreadable and
/// [`ManifestError::Parse`] when it is not valid JSON.
pub fn resolve_dependencies(
    request: &ProjectRequest,
    logger: &Logger,
) -> ManifestResult<Vec<String>> {
    let dependencies = match &request.dependency_source {
        DependencySource::Known { dependencies } => dependencies.clone(),
        DependencySource::Manifest { .. } => {
            logger.info(&format!(
                "Parsing package.json for \"{}\"",
                request.project_name
            ));
            // manifest_path() is always Some for the Manifest variant
            let path = request
                .manifest_path()
                .unwrap_or_else(|| request.root_path.join("package.json"));
            let pkg = parse_file(&path)?;
            tracked_dependencies(&pkg)
        }
    };
    logger.info(&format!(
        "Found {} tracked dependencies for \"{}\"",
        dependencies.len(),
        request.project_name
    ));
    Ok(dependencies)
}

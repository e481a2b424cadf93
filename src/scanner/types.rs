//! Wire types for the external scanner's raw usage report.
//!
//! The shapes here mirror the JSON the scanner prints in its raw-report
//! mode: a map from component name to the list of usage instances found in
//! the crawled tree. Prop values are kept opaque; only the key set is ever
//! consumed downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Import provenance for one usage instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportInfo {
    /// The module specifier the component was imported from.
    pub module_name: String,

    /// The exported identifier, when the scanner reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<String>,

    /// The local binding name at the usage site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
}

/// One occurrence of a component in source.
///
/// Instances without import info are not attributable to any library and
/// are dropped during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_info: Option<ImportInfo>,

    /// Observed props. Values are opaque; only the keys are counted.
    #[serde(default)]
    pub props: BTreeMap<String, serde_json::Value>,
}

impl RawInstance {
    /// An instance attributed to `module_name` with no props, for building
    /// reports in code.
    pub fn from_module(module_name: impl Into<String>) -> Self {
        Self {
            import_info: Some(ImportInfo {
                module_name: module_name.into(),
                imported: None,
                local: None,
            }),
            props: BTreeMap::new(),
        }
    }

    /// Adds a prop key with a placeholder value.
    pub fn with_prop(mut self, name: impl Into<String>) -> Self {
        self.props
            .insert(name.into(), serde_json::Value::String(String::new()));
        self
    }
}

/// All usage instances found for one component.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComponentUsage {
    pub instances: Vec<RawInstance>,
}

/// The scanner's full raw report: component name to its usages.
pub type RawReport = BTreeMap<String, ComponentUsage>;

/// What the external scanner is pointed at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTarget {
    /// Directory to crawl for component usages.
    pub crawl_from: PathBuf,

    /// Project root, used by scanners to resolve relative imports.
    pub root_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_raw_report() {
        let json = r#"{
            "Button": {
                "instances": [
                    {
                        "importInfo": {
                            "imported": "Button",
                            "local": "Button",
                            "moduleName": "ui-lib"
                        },
                        "props": {"color": "red"}
                    },
                    {"props": {}}
                ]
            }
        }"#;
        let report: RawReport = serde_json::from_str(json).unwrap();
        let button = &report["Button"];
        assert_eq!(button.instances.len(), 2);
        assert_eq!(
            button.instances[0]
                .import_info
                .as_ref()
                .unwrap()
                .module_name,
            "ui-lib"
        );
        assert!(button.instances[1].import_info.is_none());
    }

    #[test]
    fn test_deserialize_ignores_extra_instance_fields() {
        // real scanners also report propsSpread and source locations
        let json = r#"{
            "importInfo": {"moduleName": "ui-lib"},
            "props": {},
            "propsSpread": false,
            "location": {"file": "src/App.tsx", "start": {"line": 3, "column": 5}}
        }"#;
        let instance: RawInstance = serde_json::from_str(json).unwrap();
        assert!(instance.import_info.is_some());
        assert!(instance.props.is_empty());
    }

    #[test]
    fn test_instance_missing_props_defaults_empty() {
        let instance: RawInstance = serde_json::from_str("{}").unwrap();
        assert!(instance.import_info.is_none());
        assert!(instance.props.is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let instance = RawInstance::from_module("ui-lib").with_prop("color");
        assert_eq!(instance.import_info.unwrap().module_name, "ui-lib");
        assert!(instance.props.contains_key("color"));
    }
}

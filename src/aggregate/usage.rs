//! Usage aggregation: raw scan report to per-library component counts.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::scanner::RawReport;

/// Aggregated state for one component within one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingEntry {
    /// Component identifier as reported by the scanner.
    pub name: String,

    /// Total occurrences across the scanned tree.
    pub instance_count: u64,

    /// Prop name to the number of instances that used it.
    pub props: BTreeMap<String, u64>,
}

/// All bindings attributed to one tracked library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryReport {
    pub library: String,
    pub bindings: Vec<BindingEntry>,
}

#[derive(Default)]
struct BindingStats {
    instance_count: u64,
    props: BTreeMap<String, u64>,
}

/// Groups a raw usage report by originating library.
///
/// Pure data transformation over the scanner's report and the tracked
/// dependency set:
///
/// - instances without import info are dropped (not attributable),
/// - instances whose module is not tracked are dropped (internal/relative
///   imports, untracked transitives),
/// - everything else increments its binding's instance count and, once per
///   instance, each observed prop key's count.
///
/// Only libraries with at least one binding are emitted. Libraries,
/// bindings, and prop keys are in lexicographic order, so the output is
/// deterministic regardless of how the scanner ordered its report.
pub fn aggregate_usage(report: &RawReport, tracked: &[String]) -> Vec<LibraryReport> {
    let tracked: BTreeSet<&str> = tracked.iter().map(String::as_str).collect();
    let mut grouped: BTreeMap<&str, BTreeMap<&str, BindingStats>> = BTreeMap::new();

    for (component, usage) in report {
        for instance in &usage.instances {
            let Some(info) = &instance.import_info else {
                continue;
            };
            if !tracked.contains(info.module_name.as_str()) {
                continue;
            }

            let binding = grouped
                .entry(info.module_name.as_str())
                .or_default()
                .entry(component.as_str())
                .or_default();
            binding.instance_count += 1;
            // props is a map, so each key counts at most once per instance
            for prop in instance.props.keys() {
                *binding.props.entry(prop.clone()).or_insert(0) += 1;
            }
        }
    }

    grouped
        .into_iter()
        .map(|(library, bindings)| LibraryReport {
            library: library.to_string(),
            bindings: bindings
                .into_iter()
                .map(|(name, stats)| BindingEntry {
                    name: name.to_string(),
                    instance_count: stats.instance_count,
                    props: stats.props,
                })
                .collect(),
        })
        .collect()
}

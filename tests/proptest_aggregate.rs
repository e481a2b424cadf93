//! Property-based tests for the usage aggregator

use proptest::prelude::*;
use reactscope::aggregate::aggregate_usage;
use reactscope::scanner::{ComponentUsage, ImportInfo, RawInstance, RawReport};

fn arb_instance() -> impl Strategy<Value = RawInstance> {
    (
        prop::option::of(prop_oneof![
            Just("ui-lib".to_string()),
            Just("icon-lib".to_string()),
            Just("untracked-lib".to_string()),
            Just("./local/button".to_string()),
        ]),
        prop::collection::btree_set("[a-z]{1,4}", 0..4),
    )
        .prop_map(|(module, props)| RawInstance {
            import_info: module.map(|module_name| ImportInfo {
                module_name,
                imported: None,
                local: None,
            }),
            props: props
                .into_iter()
                .map(|p| (p, serde_json::Value::Null))
                .collect(),
        })
}

fn arb_report() -> impl Strategy<Value = RawReport> {
    prop::collection::btree_map(
        "[A-Z][a-zA-Z]{0,6}",
        prop::collection::vec(arb_instance(), 0..6)
            .prop_map(|instances| ComponentUsage { instances }),
        0..5,
    )
}

fn tracked() -> Vec<String> {
    vec!["ui-lib".to_string(), "icon-lib".to_string()]
}

/// Raw instances matching (library, component) with trackable import info.
fn matching_instances<'a>(
    report: &'a RawReport,
    library: &str,
    component: &str,
) -> Vec<&'a RawInstance> {
    report
        .get(component)
        .map(|usage| {
            usage
                .instances
                .iter()
                .filter(|i| {
                    i.import_info
                        .as_ref()
                        .is_some_and(|info| info.module_name == library)
                })
                .collect()
        })
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn only_tracked_libraries_appear(report in arb_report()) {
        let deps = tracked();
        for library in aggregate_usage(&report, &deps) {
            prop_assert!(deps.contains(&library.library));
        }
    }

    #[test]
    fn instance_counts_are_conserved(report in arb_report()) {
        let deps = tracked();
        for library in aggregate_usage(&report, &deps) {
            for binding in &library.bindings {
                let expected = matching_instances(&report, &library.library, &binding.name).len();
                prop_assert_eq!(binding.instance_count, expected as u64);
            }
        }
    }

    #[test]
    fn prop_counts_match_and_never_exceed_instances(report in arb_report()) {
        let deps = tracked();
        for library in aggregate_usage(&report, &deps) {
            for binding in &library.bindings {
                let matching = matching_instances(&report, &library.library, &binding.name);
                for (prop, count) in &binding.props {
                    prop_assert!(*count <= binding.instance_count);
                    let expected = matching
                        .iter()
                        .filter(|i| i.props.contains_key(prop))
                        .count();
                    prop_assert_eq!(*count, expected as u64);
                }
            }
        }
    }

    #[test]
    fn aggregation_is_idempotent(report in arb_report()) {
        let deps = tracked();
        prop_assert_eq!(
            aggregate_usage(&report, &deps),
            aggregate_usage(&report, &deps)
        );
    }

    #[test]
    fn instances_without_imports_never_contribute(report in arb_report()) {
        let stripped: RawReport = report
            .iter()
            .map(|(name, usage)| {
                let instances = usage
                    .instances
                    .iter()
                    .map(|i| RawInstance {
                        import_info: None,
                        props: i.props.clone(),
                    })
                    .collect();
                (name.clone(), ComponentUsage { instances })
            })
            .collect();
        prop_assert!(aggregate_usage(&stripped, &tracked()).is_empty());
    }

    #[test]
    fn empty_tracked_set_yields_empty_output(report in arb_report()) {
        prop_assert!(aggregate_usage(&report, &[]).is_empty());
    }
}

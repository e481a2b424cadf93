//! Aggregation of raw scan reports into per-library usage summaries.
//!
//! This is the analysis core of the crate: a pure, deterministic
//! transformation from the external scanner's component-keyed report plus a
//! tracked dependency set into [`LibraryReport`]s that group component
//! bindings under the library they were imported from.
//!
//! # Example
//!
//! ```
//! use reactscope::aggregate::aggregate_usage;
//! use reactscope::scanner::{ComponentUsage, RawInstance, RawReport};
//!
//! let mut report = RawReport::new();
//! report.insert(
//!     "Button".to_string(),
//!     ComponentUsage {
//!         instances: vec![RawInstance::from_module("ui-lib").with_prop("color")],
//!     },
//! );
//!
//! let tracked = vec!["ui-lib".to_string()];
//! let libraries = aggregate_usage(&report, &tracked);
//! assert_eq!(libraries[0].bindings[0].instance_count, 1);
//! ```

mod usage;

pub use usage::{aggregate_usage, BindingEntry, LibraryReport};

//! ReactScope - batch React component usage analyzer
//!
//! This crate scans one or more front-end project source trees for React
//! component usages and groups them by the third-party library each component
//! was imported from, counting instance occurrences and prop usage frequency.
//! The source crawl itself is delegated to an external scanner modeled behind
//! the [`scanner::Scanner`] trait; everything downstream of the raw scan
//! report lives here.

pub mod aggregate;
pub mod batch;
pub mod logger;
pub mod parser;
pub mod scanner;

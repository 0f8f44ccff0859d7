//! Sample dataset construction and lookup.
//!
//! # Responsibility
//! - Decode and validate the embedded placeholder dataset.
//! - Serve group/item lookups to the presentation layer.
//!
//! # Invariants
//! - The group list is fixed once the data source is constructed.
//! - Lookups return a value only for exactly one match.

pub mod data_source;
pub mod seed;

pub use data_source::{DataSourceError, SampleDataSource, ALL_GROUPS_ID};
pub use seed::{SeedDocument, SeedError, SeedGroup};

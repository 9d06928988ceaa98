//! Shared medallion pipeline domain primitives.
//!
//! This crate owns the CSV table model, the country-region lookup, the two
//! tier transforms, and the storage key conventions. It intentionally
//! excludes AWS SDK and Lambda runtime concerns; those live in
//! `crates/medallion_lambda`.

pub mod aggregate;
pub mod contract;
pub mod enrich;
pub mod regions;
pub mod storage_keys;
pub mod table;

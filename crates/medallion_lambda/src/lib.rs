//! AWS-oriented adapters and handlers for the medallion pipeline stages.
//!
//! This crate owns runtime integration details (Lambda entry points and the
//! storage adapter); the tier transforms, event contract, and key
//! conventions live in `medallion_core`.

pub mod adapters;
pub mod handlers;

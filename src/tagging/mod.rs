//! Content tagging dispatch for Folksonomy.
//!
//! This module turns a heterogeneous list of service descriptors (bare
//! names or name-to-settings mappings) into configured tagging-service
//! clients and fans a `get_tags` call out across all of them, aggregating
//! the results in configuration order. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
